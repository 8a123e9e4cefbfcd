//! Rolling polynomial accumulator — the hash state.
//!
//! Folding words w₀, w₁, …, wₙ₋₁ evaluates the polynomial
//! `w₀·rⁿ⁻¹ + w₁·rⁿ⁻² + … + wₙ₋₁` over ℤ/2⁶⁴ by Horner's rule, where `r`
//! is the per-instance rolling coefficient. Words folded earlier are
//! multiplied by higher powers of `r`, so changes near the start of a field
//! sequence stay well mixed in the output. Extraction multiplies by a second
//! per-instance coefficient and keeps the requested number of high bits.

use std::fmt;

use rand_core::RngCore;

/// Rolling coefficient of the non-randomized accumulator.
pub const DEFAULT_ROLLING_FACTOR: u64 = 31;

/// Final coefficient of the non-randomized accumulator.
pub const DEFAULT_FINAL_FACTOR: u64 = 1;

/// Incremental hash state with a fixed pair of mixing coefficients.
///
/// Both coefficients are set at construction and never change. The type is
/// `Copy`, and a copy shares no state with the original afterwards — this is
/// what lets [`HashFunction`](crate::HashFunction) replay a fresh accumulator
/// for every hashed value.
#[derive(Clone, Copy)]
pub struct Accumulator {
    value: u64,
    rolling_factor: u64,
    final_factor: u64,
}

impl Accumulator {
    /// Creates an accumulator with the fixed default coefficients.
    ///
    /// Deterministic and reproducible — no universality guarantee. Use
    /// [`random`](Self::random) for real hashing; this variant exists for
    /// tests and placeholder slots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            rolling_factor: DEFAULT_ROLLING_FACTOR,
            final_factor: DEFAULT_FINAL_FACTOR,
        }
    }

    /// Creates an accumulator with coefficients drawn uniformly from the
    /// full 64-bit range.
    ///
    /// Draws exactly two words from `rng`: the rolling coefficient first,
    /// the final coefficient second. A zero rolling coefficient degrades
    /// the construction but is not rejected — the 2⁻⁶⁴ chance is accepted
    /// as negligible.
    #[must_use]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self {
            value: 0,
            rolling_factor: rng.next_u64(),
            final_factor: rng.next_u64(),
        }
    }

    /// Folds one word into the running state.
    ///
    /// `value ← value · rolling_factor + word` modulo 2⁶⁴.
    #[inline]
    pub const fn fold(&mut self, word: u64) {
        self.value = self.value.wrapping_mul(self.rolling_factor).wrapping_add(word);
    }

    /// Returns the top `nbits` bits of the mixed state, or 0 when
    /// `nbits == 0`.
    ///
    /// Mixing multiplies the running state by the final coefficient modulo
    /// 2⁶⁴, then shifts the product right by `64 - nbits`.
    ///
    /// # Panics
    ///
    /// Panics if `nbits > 64`.
    #[inline]
    #[must_use]
    pub const fn extract(&self, nbits: u32) -> u64 {
        assert!(nbits <= 64, "extraction width must be at most 64 bits");
        if nbits == 0 {
            0
        } else {
            self.value.wrapping_mul(self.final_factor) >> (64 - nbits)
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("value", &format_args!("{:#018x}", self.value))
            .field("rolling_factor", &format_args!("{:#018x}", self.rolling_factor))
            .field("final_factor", &format_args!("{:#018x}", self.final_factor))
            .finish()
    }
}
