//! Field-append protocol — how values decompose into foldable words.
//!
//! [`Hashable`] is the sole mechanism by which a type becomes hashable: the
//! core never inspects a representation itself. An implementation appends
//! the value's fields to an [`Accumulator`] in a fixed, self-consistent
//! order.
//!
//! Variable-length collections fold their element count before their
//! elements, so two sequences where one is a prefix of the other never
//! produce the same word stream. Fixed-size aggregates (arrays, tuples)
//! carry their length in the type and fold elements only.

use crate::accum::Accumulator;

/// A type that can decompose itself into a sequence of foldable words.
///
/// Implementations must fold the same words in the same order for equal
/// values on every call.
pub trait Hashable {
    /// Appends this value's fields to `accum` in a fixed order.
    fn fold_into(&self, accum: &mut Accumulator);
}

// ---------------------------------------------------------------------------
// Primitive integers
// ---------------------------------------------------------------------------

macro_rules! impl_hashable_unsigned {
    ($($t:ty),+) => {$(
        impl Hashable for $t {
            #[inline]
            fn fold_into(&self, accum: &mut Accumulator) {
                accum.fold(u64::from(*self));
            }
        }
    )+};
}

// Signed widths sign-extend to 64 bits, so e.g. -1i8 and -1i64 fold the
// same word.
macro_rules! impl_hashable_signed {
    ($($t:ty),+) => {$(
        impl Hashable for $t {
            #[inline]
            fn fold_into(&self, accum: &mut Accumulator) {
                accum.fold(i64::from(*self).cast_unsigned());
            }
        }
    )+};
}

impl_hashable_unsigned!(u8, u16, u32);
impl_hashable_signed!(i8, i16, i32);

impl Hashable for u64 {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(*self);
    }
}

impl Hashable for i64 {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(self.cast_unsigned());
    }
}

impl Hashable for usize {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(*self as u64);
    }
}

impl Hashable for isize {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold((*self as i64).cast_unsigned());
    }
}

// 128-bit values span two words: high first, then low.
impl Hashable for u128 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold((self >> 64) as u64);
        accum.fold(*self as u64);
    }
}

impl Hashable for i128 {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        self.cast_unsigned().fold_into(accum);
    }
}

// ---------------------------------------------------------------------------
// Other scalars
// ---------------------------------------------------------------------------

impl Hashable for bool {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(u64::from(*self));
    }
}

impl Hashable for char {
    #[inline]
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(u64::from(*self));
    }
}

// ---------------------------------------------------------------------------
// Text and sequences
// ---------------------------------------------------------------------------

impl Hashable for str {
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(self.len() as u64);
        for byte in self.bytes() {
            accum.fold(u64::from(byte));
        }
    }
}

impl Hashable for String {
    fn fold_into(&self, accum: &mut Accumulator) {
        self.as_str().fold_into(accum);
    }
}

impl<T: Hashable> Hashable for [T] {
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(self.len() as u64);
        for item in self {
            item.fold_into(accum);
        }
    }
}

impl<T: Hashable> Hashable for Vec<T> {
    fn fold_into(&self, accum: &mut Accumulator) {
        self.as_slice().fold_into(accum);
    }
}

impl<T: Hashable, const N: usize> Hashable for [T; N] {
    fn fold_into(&self, accum: &mut Accumulator) {
        for item in self {
            item.fold_into(accum);
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

// A discriminant word keeps `None` distinct from `Some(0)`, and `Some(x)`
// distinct from a bare `x`.
impl<T: Hashable> Hashable for Option<T> {
    fn fold_into(&self, accum: &mut Accumulator) {
        accum.fold(u64::from(self.is_some()));
        if let Some(value) = self {
            value.fold_into(accum);
        }
    }
}

macro_rules! impl_hashable_tuple {
    ($($name:ident)+) => {
        impl<$($name: Hashable),+> Hashable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn fold_into(&self, accum: &mut Accumulator) {
                let ($($name,)+) = self;
                $($name.fold_into(accum);)+
            }
        }
    };
}

impl_hashable_tuple!(A);
impl_hashable_tuple!(A B);
impl_hashable_tuple!(A B C);
impl_hashable_tuple!(A B C D);
impl_hashable_tuple!(A B C D E);
impl_hashable_tuple!(A B C D E F);
impl_hashable_tuple!(A B C D E F G);
impl_hashable_tuple!(A B C D E F G H);

impl<T: Hashable + ?Sized> Hashable for &T {
    fn fold_into(&self, accum: &mut Accumulator) {
        (**self).fold_into(accum);
    }
}
