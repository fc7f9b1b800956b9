// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Taster hat einen eigenen Task, der Flanken als InputEvent in den
// Channel schreibt. Der Game-Task besitzt den kompletten Spielzustand.

pub mod buttons;
pub mod game;

// Re-export Tasks für einfachen Import
pub use buttons::button_task;
pub use game::game_task;
