//! Randomly drawn hash functions with a fixed output width.

use std::fmt;

use rand_core::RngCore;

use crate::accum::Accumulator;
use crate::fold::Hashable;

/// One randomly selected member of a universal hash family.
///
/// Construction draws a coefficient pair from the caller's generator and
/// fixes the output width; [`hash`](Self::hash) then maps any [`Hashable`]
/// value into `[0, 2ⁿ)`. The instance itself is immutable — every call
/// replays the value's field sequence through a private copy of the
/// coefficient pair, so one instance is safe to share across threads
/// without coordination.
///
/// Two instances drawn independently disagree on almost every input. The
/// collision bound holds over the random draw, so anything needing a
/// stable code across runs or replicas must keep the instance, not redraw
/// it.
#[derive(Clone, Copy)]
pub struct HashFunction {
    accum: Accumulator,
    nbits: u32,
}

impl HashFunction {
    /// Draws a new hash function with output width `nbits`.
    ///
    /// Consumes exactly two words from `rng` (the accumulator coefficient
    /// pair) and retains no reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `nbits > 64`.
    #[must_use]
    pub fn new<R: RngCore + ?Sized>(rng: &mut R, nbits: u32) -> Self {
        assert!(nbits <= 64, "output width must be at most 64 bits");
        Self {
            accum: Accumulator::random(rng),
            nbits,
        }
    }

    /// Hashes `value` to a code in `[0, 2ⁿ)` for width `n`.
    ///
    /// Pure with respect to `self`: the stored coefficient pair is copied
    /// into a fresh accumulator, the value's fields are folded through it,
    /// and the configured width is extracted. Same instance + same value =
    /// same code, always.
    #[must_use]
    pub fn hash<T: Hashable + ?Sized>(&self, value: &T) -> u64 {
        let mut accum = self.accum;
        value.fold_into(&mut accum);
        accum.extract(self.nbits)
    }

    /// Returns the output width in bits.
    #[must_use]
    pub const fn nbits(&self) -> u32 {
        self.nbits
    }
}

/// Placeholder instance with the fixed default coefficients at width 64.
///
/// Usable only as a default value to be overwritten: the coefficients are
/// guessable constants, so none of the collision guarantees hold. Replace
/// it with a seeded instance from [`HashFunction::new`] before hashing
/// real data.
impl Default for HashFunction {
    fn default() -> Self {
        Self {
            accum: Accumulator::new(),
            nbits: 64,
        }
    }
}

impl fmt::Debug for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashFunction")
            .field("accum", &self.accum)
            .field("nbits", &self.nbits)
            .finish()
    }
}
