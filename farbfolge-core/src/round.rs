//! Round Controller - Rundenzähler, Sequenz, Cursor und Lichter
//!
//! `Game` ist der einzige Besitzer des gesamten Spielzustands. Alle drei
//! Event-Quellen (Taster, Step-Timer, Idle-Timer) laufen über `&mut self`,
//! die Serialisierung übernimmt der aufrufende Task.

use rand_core::RngCore;

use crate::logic::shuffle_colors;
use crate::timeout::{TimeoutManager, Timeouts};
use crate::traits::{LightError, LightWriter};
use crate::types::{
    ACTIVE_ROUNDS, COLOR_COUNT, Color, Expired, Outcome, Phase, PressCounters, RoundStart,
    RoundState, SEQUENCE_LEN, Sequence,
};

/// Spielzustand inklusive Hardware-Handles
///
/// # Trait-basierte Abstraktion
/// - `L: LightWriter` - GPIO-Lichter oder Mock
/// - `R: RngCore` - Hardware-RNG oder deterministischer Test-RNG
pub struct Game<L, R> {
    pub(crate) lights: L,
    pub(crate) rng: R,
    pub(crate) timers: TimeoutManager,
    pub(crate) state: Option<RoundState>,
    pub(crate) counters: PressCounters,
    pub(crate) free_play_presses: u32,
    lit: [bool; COLOR_COUNT],
    blackout: bool,
}

impl<L: LightWriter, R: RngCore> Game<L, R> {
    pub fn new(lights: L, rng: R, timeouts: Timeouts) -> Self {
        Self {
            lights,
            rng,
            timers: TimeoutManager::new(timeouts),
            state: None,
            counters: PressCounters::default(),
            free_play_presses: 0,
            lit: [false; COLOR_COUNT],
            blackout: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            None => Phase::NotStarted,
            Some(state) if state.round > ACTIVE_ROUNDS => Phase::SessionComplete,
            Some(_) => Phase::StepActive,
        }
    }

    /// Aktuelle Rundennummer (0 vor dem ersten Start)
    pub fn round(&self) -> u32 {
        self.state.map_or(0, |state| state.round)
    }

    pub fn state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    pub fn sequence(&self) -> Option<Sequence> {
        self.state.map(|state| state.sequence)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.map(|state| state.cursor)
    }

    pub fn expected(&self) -> Option<Color> {
        self.state.map(|state| state.expected())
    }

    pub fn counters(&self) -> &PressCounters {
        &self.counters
    }

    pub fn free_play_presses(&self) -> u32 {
        self.free_play_presses
    }

    /// Zuletzt geschalteter Zustand eines Lichts
    pub fn is_lit(&self, color: Color) -> bool {
        self.lit[color.index()]
    }

    /// true wenn alle vier Lichter aus sind
    pub fn is_dark(&self) -> bool {
        self.lit.iter().all(|on| !on)
    }

    /// true nach Ablauf des Idle-Timers, bis zur nächsten Eingabe oder Runde
    ///
    /// Anders als `is_dark()` bleibt das nach einem Step-Timeout false.
    pub fn is_blackout(&self) -> bool {
        self.blackout
    }

    /// Nächster Zeitpunkt, zu dem `poll_timeouts()` aufgerufen werden muss
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn timers(&self) -> &TimeoutManager {
        &self.timers
    }

    pub fn lights(&self) -> &L {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut L {
        &mut self.lights
    }

    /// Startet die nächste Runde
    ///
    /// Erhöht den Rundenzähler, mischt eine neue Sequenz, setzt den Cursor auf
    /// 0, armiert beide Timer und schaltet das erste erwartete Licht ein.
    /// Beim Start von Runde 11 wird einmalig die Zusammenfassung mitgeliefert.
    pub fn start_round(&mut self, now_ms: u64) -> Result<RoundStart, LightError> {
        let round = self.round().saturating_add(1);
        let sequence = shuffle_colors(&mut self.rng);
        let state = RoundState {
            round,
            sequence,
            cursor: 0,
        };
        self.state = Some(state);
        self.rearm_timers(now_ms);
        self.show_only(state.expected())?;

        let summary = (round == ACTIVE_ROUNDS + 1).then_some(self.counters);
        Ok(RoundStart {
            round,
            sequence,
            summary,
        })
    }

    /// Rückt nach einem korrekten Druck einen Schritt weiter
    ///
    /// Nach dem letzten Schritt startet sofort die nächste Runde, es gibt
    /// keinen Leerlauf zwischen Runden.
    pub fn advance_step(&mut self, now_ms: u64) -> Result<Outcome, LightError> {
        let Some(state) = self.state.as_mut() else {
            return Ok(Outcome::Ignored);
        };
        let pressed = state.expected();
        state.cursor += 1;

        if state.cursor >= SEQUENCE_LEN {
            let next = self.start_round(now_ms)?;
            return Ok(Outcome::RoundComplete { pressed, next });
        }

        let expected = state.expected();
        let cursor = state.cursor;
        self.show_only(expected)?;
        Ok(Outcome::Advanced {
            pressed,
            expected,
            cursor,
        })
    }

    /// Verarbeitet abgelaufene Timer
    ///
    /// Step-Timer: nur das erwartete Licht aus, Cursor bleibt.
    /// Idle-Timer: alle Lichter aus.
    pub fn poll_timeouts(&mut self, now_ms: u64) -> Result<Expired, LightError> {
        let expired = self.timers.poll(now_ms);

        if expired.step {
            if let Some(expected) = self.expected() {
                self.set_light(expected, false)?;
            }
        }

        if expired.idle {
            self.blackout = true;
            self.all_off()?;
        }

        Ok(expired)
    }

    /// Beide Timer auf volle Dauer, beendet einen Blackout
    pub(crate) fn rearm_timers(&mut self, now_ms: u64) {
        self.timers.rearm(now_ms);
        self.blackout = false;
    }

    pub(crate) fn set_light(&mut self, color: Color, on: bool) -> Result<(), LightError> {
        self.lights.set_light(color, on)?;
        self.lit[color.index()] = on;
        Ok(())
    }

    /// Nur `color` leuchtet, alle anderen Lichter aus
    fn show_only(&mut self, color: Color) -> Result<(), LightError> {
        self.blackout = false;
        for other in Color::ALL {
            if other != color {
                self.set_light(other, false)?;
            }
        }
        self.set_light(color, true)
    }

    fn all_off(&mut self) -> Result<(), LightError> {
        for color in Color::ALL {
            self.set_light(color, false)?;
        }
        Ok(())
    }
}
