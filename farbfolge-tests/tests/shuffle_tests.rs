//! Integration Tests für den Fisher-Yates Shuffle
//!
//! Nutzt einen geseedeten PCG32, damit die Statistik reproduzierbar bleibt.

mod common;

use common::{MockLights, ScriptedRng};
use farbfolge_core::{Color, Game, Sequence, Timeouts, shuffle_colors};
use rand_core::SeedableRng;
use rand_pcg::Pcg32;

/// Eindeutiger Schlüssel einer Reihenfolge (Basis 4)
fn ordering_key(sequence: &Sequence) -> usize {
    sequence
        .iter()
        .fold(0, |key, color| key * 4 + color.index())
}

fn is_permutation(sequence: &Sequence) -> bool {
    sequence.len() == 4
        && Color::ALL
            .iter()
            .all(|c| sequence.iter().filter(|s| s == c).count() == 1)
}

#[test]
fn test_shuffle_always_yields_permutation() {
    let mut rng = Pcg32::seed_from_u64(7);
    for _ in 0..1_000 {
        let sequence = shuffle_colors(&mut rng);
        assert!(is_permutation(&sequence), "not a permutation: {}", sequence);
    }
}

#[test]
fn test_shuffle_reaches_all_orderings_evenly() {
    let mut rng = Pcg32::seed_from_u64(42);
    let mut counts = [0u32; 256];
    let draws = 24 * 200;

    for _ in 0..draws {
        let sequence = shuffle_colors(&mut rng);
        counts[ordering_key(&sequence)] += 1;
    }

    let reached: Vec<u32> = counts.iter().copied().filter(|c| *c > 0).collect();
    assert_eq!(reached.len(), 24);
    // Erwartet 200 pro Reihenfolge, großzügige Toleranz
    for count in reached {
        assert!((100..=300).contains(&count), "skewed ordering count {}", count);
    }
}

#[test]
fn test_scripted_draws_give_known_sequence() {
    let mut rng = ScriptedRng::red_green_blue_yellow();
    let sequence = shuffle_colors(&mut rng);
    assert_eq!(
        sequence.as_slice(),
        &[Color::Red, Color::Green, Color::Blue, Color::Yellow]
    );
}

#[test]
fn test_each_round_gets_a_fresh_sequence() {
    let mut game = Game::new(MockLights::new(), Pcg32::seed_from_u64(3), Timeouts::default());
    let mut seen = Vec::new();

    for i in 0..20 {
        let start = game.start_round(i * 1_000).unwrap();
        assert!(is_permutation(&start.sequence));
        seen.push(start.sequence);
    }

    let first = seen[0];
    assert!(seen.iter().any(|s| *s != first));
}
