//! Generic 2D and 3D vectors.
//!
//! [`TVec2`] and [`TVec3`] are parametrized over a [`Scalar`] component type.
//! Operations that only make sense for some component types are gated by trait
//! bounds: `%` requires a primitive integer, while [`TVec2::length`] and
//! [`TVec2::normalized`] require a float. [`TVec2::length_as`] returns the
//! length of any vector, integer ones included, in a chosen float type.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::{Float, NumCast, PrimInt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::scalar::{hash_components, Scalar};

/// A 2-component vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TVec2<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

/// A 3-component vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TVec3<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
    /// Third component.
    pub z: T,
}

/// `f32` 2D vector.
pub type FVec2 = TVec2<f32>;
/// `i32` 2D vector.
pub type IVec2 = TVec2<i32>;
/// Default 2D vector.
pub type Vec2 = FVec2;

/// `f32` 3D vector.
pub type FVec3 = TVec3<f32>;
/// `i32` 3D vector.
pub type IVec3 = TVec3<i32>;
/// Default 3D vector.
pub type Vec3 = FVec3;

/// Operations shared by every vector arity.
///
/// This is what the free distance functions are written against.
pub trait Vector: Copy + Sub<Output = Self> {
    /// Component type.
    type Scalar: Scalar;

    /// Sum of the squared components.
    fn length_squared(&self) -> Self::Scalar;

    /// Sum of the pairwise component products.
    fn dot(&self, other: &Self) -> Self::Scalar;
}

/// Squared distance between `a` and `b`, equal to `(b - a).length_squared()`.
pub fn distance_squared<V: Vector>(a: V, b: V) -> V::Scalar {
    (b - a).length_squared()
}

/// Euclidean distance between `a` and `b` for float vectors.
pub fn distance<V>(a: V, b: V) -> V::Scalar
where
    V: Vector,
    V::Scalar: Float,
{
    distance_squared(a, b).sqrt()
}

/// Euclidean distance between `a` and `b` expressed in the float type `U`.
///
/// Works for integer vectors as well.
pub fn distance_as<U: Float, V: Vector>(a: V, b: V) -> U {
    sqrt_as(distance_squared(a, b))
}

fn sqrt_as<U: Float, T: Scalar>(value: T) -> U {
    <U as NumCast>::from(value).map_or_else(U::nan, U::sqrt)
}

macro_rules! vector_common {
    ($name:ident, $arity:literal, { $($field:ident : $idx:literal),+ }) => {
        impl<T> $name<T> {
            /// Number of components.
            pub const ARITY: usize = $arity;

            /// Creates a new vector from its components.
            #[must_use]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> $name<T> {
            /// Returns the component at `index`.
            ///
            /// # Errors
            ///
            /// Returns `Err(GeomError::ComponentIndexOutOfRange)` if `index >= ARITY`.
            pub fn get(&self, index: usize) -> Result<T, GeomError> {
                match index {
                    $($idx => Ok(self.$field),)+
                    _ => Err(GeomError::ComponentIndexOutOfRange { index, arity: $arity }),
                }
            }

            /// Returns a mutable reference to the component at `index`.
            ///
            /// # Errors
            ///
            /// Returns `Err(GeomError::ComponentIndexOutOfRange)` if `index >= ARITY`.
            pub fn get_mut(&mut self, index: usize) -> Result<&mut T, GeomError> {
                match index {
                    $($idx => Ok(&mut self.$field),)+
                    _ => Err(GeomError::ComponentIndexOutOfRange { index, arity: $arity }),
                }
            }

            /// Overwrites the component at `index`. The vector is unchanged on error.
            ///
            /// # Errors
            ///
            /// Returns `Err(GeomError::ComponentIndexOutOfRange)` if `index >= ARITY`.
            pub fn set(&mut self, index: usize, value: T) -> Result<(), GeomError> {
                *self.get_mut(index)? = value;
                Ok(())
            }

            /// Sum of the squared components. Exact for every component type.
            #[must_use]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Sum of the pairwise component products.
            #[must_use]
            pub fn dot(&self, other: &Self) -> T {
                T::zero() $(+ self.$field * other.$field)+
            }

            /// Length converted to the float type `U`.
            #[must_use]
            pub fn length_as<U: Float>(&self) -> U {
                sqrt_as(self.length_squared())
            }

            /// Component-wise absolute value.
            #[must_use]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            /// Components in declaration order.
            #[must_use]
            pub fn to_array(self) -> [T; $arity] {
                [$(self.$field),+]
            }

            /// Hash of the vector, combining the per-component hashes.
            #[must_use]
            pub fn hash_value(&self) -> u64 {
                hash_components(&self.to_array())
            }
        }

        impl<T: Scalar + Float> $name<T> {
            /// Euclidean length.
            #[must_use]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Unit vector with the same heading.
            ///
            /// A zero-length vector yields NaN components rather than an error.
            #[must_use]
            pub fn normalized(self) -> Self {
                let one_over_length = T::one() / self.length();
                Self { $($field: self.$field * one_over_length),+ }
            }
        }

        impl<T: Scalar> Vector for $name<T> {
            type Scalar = T;

            fn length_squared(&self) -> T {
                $name::length_squared(self)
            }

            fn dot(&self, other: &Self) -> T {
                $name::dot(self, other)
            }
        }

        impl<T: Scalar> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_value());
            }
        }

        impl<T> From<[T; $arity]> for $name<T> {
            fn from([$($field),+]: [T; $arity]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(mut self, rhs: T) -> Self {
                self *= rhs;
                self
            }
        }

        impl<T: Scalar> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
            }
        }

        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;

            fn div(mut self, rhs: T) -> Self {
                self /= rhs;
                self
            }
        }

        impl<T: Scalar + PrimInt> RemAssign<T> for $name<T> {
            fn rem_assign(&mut self, rhs: T) {
                $(self.$field = self.$field % rhs;)+
            }
        }

        impl<T: Scalar + PrimInt> Rem<T> for $name<T> {
            type Output = Self;

            fn rem(mut self, rhs: T) -> Self {
                self %= rhs;
                self
            }
        }
    };
}

vector_common!(TVec2, 2, { x: 0, y: 1 });
vector_common!(TVec3, 3, { x: 0, y: 1, z: 2 });

impl<T: Scalar> TVec3<T> {
    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T> From<(T, T)> for TVec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T, T)> for TVec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: fmt::Display> fmt::Display for TVec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for TVec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

macro_rules! vector_constants {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl TVec2<$t> {
                /// All components zero.
                pub const ZERO: Self = Self::new($zero, $zero);
                /// All components one.
                pub const ONE: Self = Self::new($one, $one);
                /// Unit vector along x.
                pub const UNIT_X: Self = Self::new($one, $zero);
                /// Unit vector along y.
                pub const UNIT_Y: Self = Self::new($zero, $one);
            }

            impl TVec3<$t> {
                /// All components zero.
                pub const ZERO: Self = Self::new($zero, $zero, $zero);
                /// All components one.
                pub const ONE: Self = Self::new($one, $one, $one);
                /// Unit vector along x.
                pub const UNIT_X: Self = Self::new($one, $zero, $zero);
                /// Unit vector along y.
                pub const UNIT_Y: Self = Self::new($zero, $one, $zero);
                /// Unit vector along z.
                pub const UNIT_Z: Self = Self::new($zero, $zero, $one);
            }
        )*
    };
}

vector_constants! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    i64 => 0, 1;
}
