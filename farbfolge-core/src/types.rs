//! Core Types für das Farbfolge-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Anzahl der Farben (= Lichter = Taster)
pub const COLOR_COUNT: usize = 4;

/// Länge einer Sequenz pro Runde
pub const SEQUENCE_LEN: usize = COLOR_COUNT;

/// Anzahl der gewerteten Runden, danach Free-Play
pub const ACTIVE_ROUNDS: u32 = 10;

/// Fehler beim Dekodieren eines Farb-Index von der Hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    UnknownColor(u8),
}

/// Fehler beim Erstellen einer Sequenz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    NotAPermutation,
}

/// Eine der vier Spielfarben
///
/// Identifiziert gleichzeitig Licht und Taster. Die Reihenfolge der Varianten
/// ist der Index in die Hardware-Arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Blue,
    Red,
    Yellow,
    Green,
}

impl Color {
    /// Alle Farben in Index-Reihenfolge
    pub const ALL: [Color; COLOR_COUNT] = [Color::Blue, Color::Red, Color::Yellow, Color::Green];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = InputError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(index as usize)
            .copied()
            .ok_or(InputError::UnknownColor(index))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flanke eines Tasters
///
/// Taster sind active-low verdrahtet: fallende Flanke = Press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Press,
    Release,
}

/// Eingabe-Event vom Button-Task an den Game-Task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputEvent {
    pub color: Color,
    pub edge: Edge,
}

impl InputEvent {
    pub const fn press(color: Color) -> Self {
        Self {
            color,
            edge: Edge::Press,
        }
    }

    pub const fn release(color: Color) -> Self {
        Self {
            color,
            edge: Edge::Release,
        }
    }
}

/// Farbfolge einer Runde - immer eine Permutation aller vier Farben
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sequence([Color; SEQUENCE_LEN]);

impl Sequence {
    /// Nur für bereits geprüfte Permutationen (Shuffle)
    pub(crate) const fn from_permutation(colors: [Color; SEQUENCE_LEN]) -> Self {
        Self(colors)
    }

    pub fn get(&self, step: usize) -> Option<Color> {
        self.0.get(step).copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    pub const fn len(&self) -> usize {
        SEQUENCE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<[Color; SEQUENCE_LEN]> for Sequence {
    type Error = SequenceError;

    fn try_from(colors: [Color; SEQUENCE_LEN]) -> Result<Self, Self::Error> {
        let mut seen = [false; COLOR_COUNT];
        for color in colors {
            if seen[color.index()] {
                return Err(SequenceError::NotAPermutation);
            }
            seen[color.index()] = true;
        }
        Ok(Self(colors))
    }
}

/// Leerzeichen-getrennte Farbnamen, z.B. `Red Green Blue Yellow`
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(color.as_str())?;
        }
        Ok(())
    }
}

/// Zähler für korrekte Tastendrücke pro Farbe
///
/// Wird innerhalb einer Session nie zurückgesetzt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressCounters {
    counts: [u32; COLOR_COUNT],
}

impl PressCounters {
    pub fn increment(&mut self, color: Color) {
        self.counts[color.index()] = self.counts[color.index()].saturating_add(1);
    }

    pub fn get(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// (Farbe, Anzahl) in Index-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.into_iter().map(|color| (color, self.get(color)))
    }
}

/// Zustand der laufenden Runde
///
/// Nur der Round Controller erzeugt und verändert ihn, dadurch gilt
/// immer `cursor < SEQUENCE_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) round: u32,
    pub(crate) sequence: Sequence,
    pub(crate) cursor: usize,
}

impl RoundState {
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Erwartete Farbe = sequence[cursor]
    pub fn expected(&self) -> Color {
        self.sequence.as_slice()[self.cursor]
    }
}

/// Phase der Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Noch keine Runde gestartet
    NotStarted,
    /// Runde 1..=10: Sequenz wird geprüft und gewertet
    StepActive,
    /// Ab Runde 11: Free-Play, Drücke werden nur geloggt
    SessionComplete,
}

/// Meldung beim Start einer Runde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStart {
    pub round: u32,
    pub sequence: Sequence,
    /// Nur beim Start von Runde 11 gesetzt (einmalige Zusammenfassung)
    pub summary: Option<PressCounters>,
}

/// Ergebnis eines verarbeiteten Eingabe-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Event ohne Zustandsänderung (falsche Farbe, ungültiger Index, ...)
    Ignored,
    /// Release der erwarteten Farbe: Licht aus
    Released(Color),
    /// Korrekter Druck, Runde läuft weiter
    Advanced {
        pressed: Color,
        expected: Color,
        cursor: usize,
    },
    /// Korrekter Druck auf den letzten Schritt, nächste Runde gestartet
    RoundComplete { pressed: Color, next: RoundStart },
    /// Druck im Free-Play, nur geloggt
    FreePlayPress { color: Color, total: u32 },
}

/// Welche Timer bei einem Poll abgelaufen sind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expired {
    pub step: bool,
    pub idle: bool,
}

impl Expired {
    pub fn any(&self) -> bool {
        self.step || self.idle
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Color {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Edge {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Edge::Press => defmt::write!(fmt, "Press"),
            Edge::Release => defmt::write!(fmt, "Release"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputEvent {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "InputEvent {{ color: {}, edge: {} }}", self.color, self.edge)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, fmt: defmt::Formatter) {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                defmt::write!(fmt, " ");
            }
            defmt::write!(fmt, "{}", color);
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PressCounters {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PressCounters {{ Blue: {}, Red: {}, Yellow: {}, Green: {} }}",
            self.counts[0],
            self.counts[1],
            self.counts[2],
            self.counts[3]
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Phase {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Phase::NotStarted => defmt::write!(fmt, "NotStarted"),
            Phase::StepActive => defmt::write!(fmt, "StepActive"),
            Phase::SessionComplete => defmt::write!(fmt, "SessionComplete"),
        }
    }
}
