//! Farbfolge Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Spiel-Zustandsmaschine und Pure Functions.

#![no_std]

pub mod logic;
mod matcher;
pub mod round;
pub mod timeout;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{shuffle_colors, status_color};
pub use round::Game;
pub use timeout::{Deadline, IDLE_TIMEOUT_MS, STEP_TIMEOUT_MS, TimeoutManager, Timeouts};
pub use traits::{LightError, LightWriter, StatusLedWriter};
pub use types::{
    ACTIVE_ROUNDS, COLOR_COUNT, Color, Edge, Expired, InputError, InputEvent, Outcome, Phase,
    PressCounters, RoundStart, RoundState, SEQUENCE_LEN, Sequence, SequenceError,
};
