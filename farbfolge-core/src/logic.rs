//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rand_core::RngCore;
use rgb::RGB8;

use crate::types::{Color, Phase, SEQUENCE_LEN, Sequence};

/// Mischt die vier Farben zu einer neuen Sequenz (Fisher-Yates)
///
/// Jede der 24 Reihenfolgen ist gleich wahrscheinlich. Verändert keinen
/// externen Zustand außer dem RNG.
///
/// # Beispiele
///
/// ```
/// # use farbfolge_core::{Color, shuffle_colors};
/// # use rand_core::{RngCore, impls};
/// # struct Zero;
/// # impl RngCore for Zero {
/// #     fn next_u32(&mut self) -> u32 { 0 }
/// #     fn next_u64(&mut self) -> u64 { 0 }
/// #     fn fill_bytes(&mut self, dst: &mut [u8]) { impls::fill_bytes_via_next(self, dst) }
/// # }
/// let sequence = shuffle_colors(&mut Zero);
/// assert_eq!(sequence.len(), 4);
/// assert!(Color::ALL.iter().all(|c| sequence.iter().any(|s| s == *c)));
/// ```
pub fn shuffle_colors<R: RngCore + ?Sized>(rng: &mut R) -> Sequence {
    let mut colors = Color::ALL;
    for i in (1..SEQUENCE_LEN).rev() {
        let k = uniform_index(rng, i as u32 + 1) as usize;
        colors.swap(i, k);
    }
    Sequence::from_permutation(colors)
}

/// Gleichverteilter Index in [0, bound) per Rejection Sampling
fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    // Größtes Vielfaches von bound <= u32::MAX, darüber wird verworfen
    let zone = (u32::MAX / bound) * bound;
    loop {
        let x = rng.next_u32();
        if x < zone {
            return x % bound;
        }
    }
}

/// Farbe der Status-LED für eine Session-Phase
///
/// - Vor dem Start und nach dem Idle-Blackout: aus
/// - Gewertete Runden: Grün
/// - Free-Play: Blau
pub fn status_color(phase: Phase, blackout: bool, brightness: u8) -> RGB8 {
    if blackout {
        return RGB8::default();
    }
    match phase {
        Phase::NotStarted => RGB8::default(),
        Phase::StepActive => RGB8 {
            r: 0,
            g: brightness,
            b: 0,
        },
        Phase::SessionComplete => RGB8 {
            r: 0,
            g: 0,
            b: brightness,
        },
    }
}
