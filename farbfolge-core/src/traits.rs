//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::Color;

/// Fehler-Typ für Licht-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    WriteFailed,
}

/// Trait für die vier Spiel-Lichter
///
/// # Implementierungen
/// - **Production:** GpioLights (vier GPIO-Ausgänge)
/// - **Testing:** MockLights (in-memory Mock)
pub trait LightWriter {
    /// Schaltet das Licht einer Farbe ein oder aus
    ///
    /// Muss idempotent sein: mehrfaches Ausschalten ist erlaubt.
    fn set_light(&mut self, color: Color, on: bool) -> Result<(), LightError>;
}

/// Trait für die Status-LED (WS2812/Neopixel auf dem Board)
///
/// # Implementierungen
/// - **Production:** RmtStatusLed (ESP32 RMT Peripheral)
/// - **Testing:** MockStatusLed
pub trait StatusLedWriter {
    /// Schreibt eine RGB-Farbe auf die Status-LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LightError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LightError>;
}
