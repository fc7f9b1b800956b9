//! Input Matcher - prüft Tastendrücke gegen die erwartete Farbe

use rand_core::RngCore;

use crate::round::Game;
use crate::traits::{LightError, LightWriter};
use crate::types::{Color, Edge, InputEvent, Outcome, Phase};

impl<L: LightWriter, R: RngCore> Game<L, R> {
    /// Verarbeitet ein Taster-Event
    ///
    /// Jedes Event setzt zuerst beide Timer zurück, unabhängig vom Ergebnis.
    ///
    /// - Gewertete Runden: Press der erwarteten Farbe zählt und rückt vor,
    ///   Release der erwarteten Farbe schaltet deren Licht aus, alles andere
    ///   wird ohne Strafe ignoriert.
    /// - Free-Play: jeder Press wird nur gezählt und gemeldet.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        now_ms: u64,
    ) -> Result<Outcome, LightError> {
        let phase = self.phase();
        if phase == Phase::NotStarted {
            return Ok(Outcome::Ignored);
        }

        self.rearm_timers(now_ms);

        if phase == Phase::SessionComplete {
            return Ok(match event.edge {
                Edge::Press => {
                    self.free_play_presses = self.free_play_presses.saturating_add(1);
                    Outcome::FreePlayPress {
                        color: event.color,
                        total: self.free_play_presses,
                    }
                }
                Edge::Release => Outcome::Ignored,
            });
        }

        if self.expected() != Some(event.color) {
            return Ok(Outcome::Ignored);
        }

        match event.edge {
            Edge::Press => {
                self.set_light(event.color, false)?;
                self.counters.increment(event.color);
                self.advance_step(now_ms)
            }
            Edge::Release => {
                self.set_light(event.color, false)?;
                Ok(Outcome::Released(event.color))
            }
        }
    }

    /// Wie `handle_input`, aber mit rohem Farb-Index von der Hardware
    ///
    /// Indizes außerhalb der vier Farben werden stillschweigend verworfen.
    pub fn handle_raw_input(
        &mut self,
        index: u8,
        edge: Edge,
        now_ms: u64,
    ) -> Result<Outcome, LightError> {
        match Color::try_from(index) {
            Ok(color) => self.handle_input(InputEvent { color, edge }, now_ms),
            Err(_) => Ok(Outcome::Ignored),
        }
    }
}
