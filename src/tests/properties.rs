//! Statistical properties of the construction, checked with tolerance
//! bounds over seeded generator streams.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::HashFunction;

/// Independent draws at width 64 disagree on a fixed input.
///
/// A collision requires two full-width codes to match — probability ≈ 2⁻⁶⁴
/// per pair.
#[test]
fn independent_draws_disagree() {
    let mut rng = StdRng::seed_from_u64(0xC0_FFEE);
    for _ in 0..100 {
        let h1 = HashFunction::new(&mut rng, 64);
        let h2 = HashFunction::new(&mut rng, 64);
        assert_ne!(h1.hash(&100_u64), h2.hash(&100_u64));
    }
}

/// Varying the first character of a fixed-length buffer yields 26 distinct
/// codes.
///
/// The first character is multiplied by the highest power of the rolling
/// coefficient, so it must stay mixed into the full-width output.
#[test]
fn first_character_stays_mixed() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..40 {
        let h = HashFunction::new(&mut rng, 64);
        let codes: BTreeSet<u64> = ('a'..='z')
            .map(|c| h.hash(format!("{c}bcdefgh").as_str()))
            .collect();
        assert_eq!(codes.len(), 26);
    }
}

/// At width 5, the chance that a fresh draw collides 0 with 1 is exactly
/// 1/32 (the top five bits of the final coefficient must all be zero).
///
/// Expected ≈ 3 collisions in 100 draws; the bound leaves > 3σ of headroom.
#[test]
fn self_collision_rate_small_sample() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    let mut collisions = 0;
    for _ in 0..100 {
        let h = HashFunction::new(&mut rng, 5);
        if h.hash(&0_u64) == h.hash(&1_u64) {
            collisions += 1;
        }
    }
    assert!(collisions <= 9, "{collisions} collisions in 100 draws");
}

/// The collision fraction tracks 1/32 on a larger sample.
///
/// 2000 draws: expectation 62.5, σ ≈ 7.8. The window is > 5σ on both
/// sides.
#[test]
fn self_collision_rate_tracks_theory() {
    let mut rng = StdRng::seed_from_u64(0xFEED);
    let mut collisions = 0_u32;
    for _ in 0..2000 {
        let h = HashFunction::new(&mut rng, 5);
        if h.hash(&0_u64) == h.hash(&1_u64) {
            collisions += 1;
        }
    }
    assert!(
        (20..=110).contains(&collisions),
        "{collisions} collisions in 2000 draws"
    );
}

/// Width-5 range sweep, then a second function from the continued stream.
#[test]
fn width_sweep_then_continued_stream() {
    let mut rng = StdRng::seed_from_u64(0xACE);
    let h = HashFunction::new(&mut rng, 5);
    for j in 0_u64..100 {
        assert!(h.hash(&j) < 32);
    }

    let h2 = HashFunction::new(&mut rng, 64);
    assert_ne!(h.hash(&100_u64), h2.hash(&100_u64));
}
