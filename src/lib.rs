//! Universal hashing from randomly drawn polynomial coefficients.
//!
//! A [`HashFunction`] is one member of a universal hash family, selected by
//! drawing two 64-bit coefficients uniformly at random: a rolling
//! coefficient that combines a value's fields by Horner's rule over ℤ/2⁶⁴,
//! and a final coefficient that mixes the accumulated state before the top
//! `n` bits are taken as the code. For any two distinct values, the chance
//! that a freshly drawn function maps them to the same code is small and
//! bounded — over the draw, not over the inputs.
//!
//! # Key properties
//!
//! - **Universal**: collision probability bounded over the random draw
//! - **Width-selectable**: codes in `[0, 2ⁿ)` for any `n ≤ 64`, no re-hash
//!   needed for power-of-two bucket counts
//! - **Open extension**: any type becomes hashable by implementing
//!   [`Hashable`], including user aggregates and variable-length data
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! Not a cryptographic hash: an adversary who learns the drawn coefficients
//! can construct collisions at will. Not a stable hash: two independently
//! drawn instances disagree on almost every input. Callers hashing
//! recursive structures are responsible for producing a finite field
//! sequence per value.
//!
//! # References
//!
//! - Carter & Wegman, 1979 — "Universal Classes of Hash Functions"
//! - Dietzfelbinger et al., 1997 — "A Reliable Randomized Algorithm for the
//!   Closest-Pair Problem" (multiply-shift extraction)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod accum;
pub mod fold;
pub mod function;

#[cfg(test)]
mod tests;

pub use accum::Accumulator;
pub use fold::Hashable;
pub use function::HashFunction;
