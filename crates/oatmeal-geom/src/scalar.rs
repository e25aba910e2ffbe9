//! Numeric component types and the hashing helpers shared by the value types.

use core::fmt::{Debug, Display};
use num_traits::{NumCast, Signed};

/// Golden-ratio derived constant used when mixing component hashes.
pub const HASH_MIX: u64 = 0x9e37_79b9;

/// A numeric type usable as the component of a [`TVec2`](crate::TVec2) or
/// [`TVec3`](crate::TVec3).
///
/// Implemented for the signed primitive integers and both float types.
/// Integer-only operations (such as `%`) are additionally gated on
/// [`num_traits::PrimInt`].
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Display + Signed + NumCast {
    /// Hash of a single component.
    ///
    /// Values that compare equal produce the same hash, so floats fold `-0.0`
    /// onto `0.0` before hashing their bit pattern.
    fn component_hash(self) -> u64;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn component_hash(self) -> u64 {
                    self as i64 as u64
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, isize);

impl Scalar for f32 {
    #[inline]
    fn component_hash(self) -> u64 {
        if self == 0.0 { 0 } else { <u64 as From<u32>>::from(self.to_bits()) }
    }
}

impl Scalar for f64 {
    #[inline]
    fn component_hash(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() }
    }
}

/// Mixes `value` into `seed`.
///
/// `seed ^= value + HASH_MIX + (seed << 6) + (seed >> 2)`, with wrapping
/// arithmetic.
#[inline]
#[must_use]
pub const fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(HASH_MIX)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Combines the hashes of an ordered list of components.
#[inline]
#[must_use]
pub fn hash_components<T: Scalar>(components: &[T]) -> u64 {
    match components.split_first() {
        Some((first, rest)) => rest
            .iter()
            .fold(first.component_hash(), |h, c| hash_combine(h, c.component_hash())),
        None => 0,
    }
}
