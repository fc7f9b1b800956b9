// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von farbfolge-core
pub use farbfolge_core::{
    COLOR_COUNT, Color, Edge, Game, InputEvent, LightError, LightWriter, Outcome, Phase,
    RoundStart, StatusLedWriter, status_color,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::INPUT_CHANNEL_DEPTH;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Alle Tasks laufen auf demselben Executor, daher reicht NoopRawMutex.
// Der Game-Task ist der einzige Empfänger: Tastendrücke und Timer werden
// dadurch nacheinander verarbeitet.

/// Channel für Taster-Events (Button-Tasks → Game-Task)
pub type InputEventChannel = Channel<NoopRawMutex, InputEvent, INPUT_CHANNEL_DEPTH>;

/// Sender für Taster-Events (ein Klon pro Button-Task)
pub type InputEventSender = Sender<'static, NoopRawMutex, InputEvent, INPUT_CHANNEL_DEPTH>;

/// Receiver für Taster-Events (Game-Task empfängt)
pub type InputEventReceiver = Receiver<'static, NoopRawMutex, InputEvent, INPUT_CHANNEL_DEPTH>;
