//! Timeout Manager - Step-Timer und Idle-Timer
//!
//! Beide Timer sind reine Deadlines in Millisekunden. Der Game-Task wartet
//! mit `select` auf Eingabe oder die nächste Deadline, dadurch laufen
//! Timer-Callbacks und Tastendrücke nie parallel.

use crate::types::Expired;

/// Standard-Dauer des Step-Timers in Millisekunden
pub const STEP_TIMEOUT_MS: u64 = 5_000;

/// Standard-Dauer des Idle-Timers in Millisekunden
pub const IDLE_TIMEOUT_MS: u64 = 30_000;

/// Timer-Dauern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub step_ms: u64,
    pub idle_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            step_ms: STEP_TIMEOUT_MS,
            idle_ms: IDLE_TIMEOUT_MS,
        }
    }
}

/// Einzelner single-shot Timer, jederzeit neu armierbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<u64>,
}

impl Deadline {
    /// Setzt den Timer auf `now + duration` (ersetzt eine alte Deadline)
    pub fn arm(&mut self, now_ms: u64, duration_ms: u64) {
        self.at = Some(now_ms.saturating_add(duration_ms));
    }

    pub fn disarm(&mut self) {
        self.at = None;
    }

    pub fn at(&self) -> Option<u64> {
        self.at
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        matches!(self.at, Some(at) if now_ms >= at)
    }
}

/// Verwaltet Step- und Idle-Timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutManager {
    timeouts: Timeouts,
    step: Deadline,
    idle: Deadline,
}

impl TimeoutManager {
    pub fn new(timeouts: Timeouts) -> Self {
        Self {
            timeouts,
            step: Deadline::default(),
            idle: Deadline::default(),
        }
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Setzt beide Timer auf ihre volle Dauer zurück
    ///
    /// Wird bei jedem Rundenstart und jedem Eingabe-Event aufgerufen.
    pub fn rearm(&mut self, now_ms: u64) {
        self.step.arm(now_ms, self.timeouts.step_ms);
        self.idle.arm(now_ms, self.timeouts.idle_ms);
    }

    /// Früheste aktive Deadline (None = kein Timer armiert)
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.step.at(), self.idle.at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Prüft beide Timer und meldet, welche abgelaufen sind
    ///
    /// Der Step-Timer armiert sich selbst für eine weitere volle Dauer,
    /// der Idle-Timer bleibt nach Ablauf aus bis zum nächsten `rearm()`.
    pub fn poll(&mut self, now_ms: u64) -> Expired {
        let mut expired = Expired::default();

        if self.step.is_due(now_ms) {
            expired.step = true;
            self.step.arm(now_ms, self.timeouts.step_ms);
        }

        if self.idle.is_due(now_ms) {
            expired.idle = true;
            self.idle.disarm();
        }

        expired
    }

    pub fn step_deadline(&self) -> Option<u64> {
        self.step.at()
    }

    pub fn idle_deadline(&self) -> Option<u64> {
        self.idle.at()
    }
}
