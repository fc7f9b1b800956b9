// Button Task - Wandelt GPIO-Flanken in InputEvents um
use defmt::debug;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::config::DEBOUNCE_MS;
use crate::{Color, Edge, InputEvent, InputEventSender};

/// Button Task - ein Task pro Farbe
///
/// Wartet auf eine beliebige Flanke, entprellt und liest dann den
/// stabilen Pegel. Taster ziehen gegen GND: Low = Press, High = Release.
/// Gleiche Pegel hintereinander (Prellen) werden nur einmal gemeldet.
///
/// # Parameter
/// - `input`: Eingang mit Pull-Up
/// - `color`: Farbe dieses Tasters
/// - `sender`: Channel Sender zum Game-Task
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut input: Input<'static>, color: Color, sender: InputEventSender) {
    let mut pressed = input.is_low();

    loop {
        input.wait_for_any_edge().await;

        // Async Delay: Kontakt prellt einige Millisekunden
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        let now_pressed = input.is_low();
        if now_pressed == pressed {
            continue;
        }
        pressed = now_pressed;

        let edge = if pressed { Edge::Press } else { Edge::Release };
        debug!("Button {}: {}", color, edge);
        sender.send(InputEvent { color, edge }).await;
    }
}
