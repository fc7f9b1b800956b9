// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use farbfolge_core::{IDLE_TIMEOUT_MS, STEP_TIMEOUT_MS, Timeouts};

// ============================================================================
// GPIO-Zuordnung
// ============================================================================
//
// Reihenfolge immer Blue, Red, Yellow, Green (= Color::index()).
// Die Pins selbst werden in main.rs über die typisierten Peripherals gewählt,
// diese Konstanten dokumentieren die Verdrahtung.

/// GPIO-Pins der vier Spiel-Lichter (active high)
pub const LIGHT_GPIO_PINS: [u8; 4] = [0, 1, 2, 3];

/// GPIO-Pins der vier Taster (gegen GND, interner Pull-Up)
pub const BUTTON_GPIO_PINS: [u8; 4] = [4, 5, 6, 7];

/// GPIO-Pin für die RGB Status-LED (WS2812/Neopixel)
pub const STATUS_LED_GPIO_PIN: u8 = 8;

// ============================================================================
// Spiel-Timing
// ============================================================================

/// Timer-Konfiguration für den Game-Task
///
/// Step-Timer 5 s (erwartetes Licht aus), Idle-Timer 30 s (alles aus)
pub const GAME_TIMEOUTS: Timeouts = Timeouts {
    step_ms: STEP_TIMEOUT_MS,
    idle_ms: IDLE_TIMEOUT_MS,
};

// ============================================================================
// Taster
// ============================================================================

/// Entprell-Zeit nach einer Flanke in Millisekunden
pub const DEBOUNCE_MS: u64 = 20;

/// Kapazität des Input-Channels (Button-Tasks → Game-Task)
pub const INPUT_CHANNEL_DEPTH: usize = 8;

// ============================================================================
// Status-LED
// ============================================================================

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const STATUS_LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;
