// Game Task - Besitzt den Spielzustand und serialisiert alle Events
use defmt::{debug, error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use esp_hal_smartled::smart_led_buffer;
use farbfolge_core::ACTIVE_ROUNDS;
use rand_core::RngCore;
use rgb::RGB8;

use crate::config::{GAME_TIMEOUTS, RMT_CLOCK_MHZ, STATUS_LED_BRIGHTNESS};
use crate::hal::{GpioLights, HwRng, RmtStatusLed};
use crate::{
    Game, InputEventReceiver, LightWriter, Outcome, RoundStart, StatusLedWriter, status_color,
};

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Game Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Startet die erste Runde und verarbeitet danach endlos:
/// - Taster-Events aus dem Channel
/// - Ablauf von Step- und Idle-Timer
///
/// Beide Quellen werden mit `select` in dieser einen Schleife abgewartet,
/// der Zustand in `game` wird also nie gleichzeitig verändert.
///
/// # Parameter
/// - `game`: Spielzustand mit Lichtern und RNG (Hardware oder Mock)
/// - `status`: Status-LED, falls initialisiert
/// - `input_receiver`: Channel Receiver für Taster-Events
pub async fn game_logic<L: LightWriter, R: RngCore, S: StatusLedWriter>(
    mut game: Game<L, R>,
    mut status: Option<S>,
    input_receiver: InputEventReceiver,
) -> ! {
    match game.start_round(now_ms()) {
        Ok(start) => log_round_start(&start),
        Err(_) => error!("Failed to write lights on round start"),
    }

    let mut shown: Option<RGB8> = None;
    update_status(&game, &mut status, &mut shown);

    loop {
        let deadline = game
            .next_deadline()
            .map_or(Instant::MAX, Instant::from_millis);

        match select(input_receiver.receive(), Timer::at(deadline)).await {
            Either::First(event) => match game.handle_input(event, now_ms()) {
                Ok(outcome) => log_outcome(&outcome),
                Err(_) => error!("Failed to write lights for {}", event),
            },
            Either::Second(()) => match game.poll_timeouts(now_ms()) {
                Ok(expired) => {
                    if expired.step {
                        debug!("Step timeout: {} off", game.expected());
                    }
                    if expired.idle {
                        warn!("Idle timeout: all lights off");
                    }
                }
                Err(_) => error!("Failed to write lights on timeout"),
            },
        }

        update_status(&game, &mut status, &mut shown);
    }
}

fn log_outcome(outcome: &Outcome) {
    match *outcome {
        Outcome::Ignored => {}
        Outcome::Released(color) => debug!("Light {} off (released)", color),
        Outcome::Advanced { pressed, .. } => info!("Button of color {} pressed.", pressed),
        Outcome::RoundComplete { pressed, next } => {
            info!("Button of color {} pressed.", pressed);
            log_round_start(&next);
        }
        Outcome::FreePlayPress { color, total } => {
            info!("Button of color {} pressed. Total presses: {}", color, total)
        }
    }
}

fn log_round_start(start: &RoundStart) {
    info!("Round {} Start", start.round);
    info!("Sequence: {}", start.sequence);

    if let Some(summary) = start.summary {
        info!("Button press summary after {} rounds:", ACTIVE_ROUNDS);
        for (color, count) in summary.iter() {
            info!("Button {} pressed: {} times", color, count);
        }
    }
}

/// Schreibt die Status-LED nur bei Änderung
fn update_status<L: LightWriter, R: RngCore, S: StatusLedWriter>(
    game: &Game<L, R>,
    status: &mut Option<S>,
    shown: &mut Option<RGB8>,
) {
    let Some(led) = status.as_mut() else {
        return;
    };

    let color = status_color(game.phase(), game.is_blackout(), STATUS_LED_BRIGHTNESS);
    if *shown == Some(color) {
        return;
    }

    match led.write(color) {
        Ok(()) => *shown = Some(color),
        Err(_) => error!("Failed to write status LED"),
    }
}

/// Game Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung der Status-LED und
/// ruft dann die testbare `game_logic()` Funktion auf.
///
/// # Parameter
/// - `lights`: die vier Spiel-Lichter
/// - `rng`: Hardware-RNG für den Shuffle
/// - `gpio8`: GPIO8 Peripheral für die Status-LED
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `input_receiver`: Channel Receiver für Taster-Events
#[embassy_executor::task]
pub async fn game_task(
    lights: GpioLights,
    rng: esp_hal::rng::Rng,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    input_receiver: InputEventReceiver,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    let status = match RmtStatusLed::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => Some(led),
        Err(_) => {
            warn!("Status LED unavailable, continuing without it");
            None
        }
    };

    let game = Game::new(lights, HwRng::new(rng), GAME_TIMEOUTS);
    game_logic(game, status, input_receiver).await
}
