//! 2D integer point.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::scalar::{hash_combine, Scalar};
use crate::vector::IVec2;

/// A position or offset on an integer 2D lattice, typically a grid cell.
///
/// `x` grows to the right and `y` grows downward. All arithmetic is
/// component-wise and returns a new value; only the compound assignment
/// operators mutate in place.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    /// Horizontal component (column).
    pub x: i32,
    /// Vertical component (row).
    pub y: i32,
}

impl Point {
    /// Number of components in a point.
    pub const ARITY: usize = 2;

    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the component at `index` (0 is `x`, 1 is `y`).
    ///
    /// # Errors
    ///
    /// Returns `Err(GeomError::ComponentIndexOutOfRange)` for any other index.
    pub fn get(&self, index: usize) -> Result<i32, GeomError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeomError::ComponentIndexOutOfRange {
                index,
                arity: Self::ARITY,
            }),
        }
    }

    /// Returns a mutable reference to the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeomError::ComponentIndexOutOfRange)` if `index` is not 0 or 1.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut i32, GeomError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(GeomError::ComponentIndexOutOfRange {
                index,
                arity: Self::ARITY,
            }),
        }
    }

    /// Overwrites the component at `index`. The point is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeomError::ComponentIndexOutOfRange)` if `index` is not 0 or 1.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), GeomError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Component-wise absolute value.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Taxicab distance `|dx| + |dy|` between two points.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Components in declaration order.
    #[must_use]
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Hash of the point, combining the per-component hashes.
    ///
    /// This is the value reported to host runtimes and fed to [`Hasher`]s.
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        hash_combine(self.x.component_hash(), self.y.component_hash())
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<IVec2> for Point {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for IVec2 {
    fn from(p: Point) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl MulAssign<i32> for Point {
    fn mul_assign(&mut self, rhs: i32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(mut self, rhs: i32) -> Self {
        self *= rhs;
        self
    }
}

impl DivAssign<i32> for Point {
    fn div_assign(&mut self, rhs: i32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Div<i32> for Point {
    type Output = Self;

    fn div(mut self, rhs: i32) -> Self {
        self /= rhs;
        self
    }
}

impl RemAssign<i32> for Point {
    fn rem_assign(&mut self, rhs: i32) {
        self.x %= rhs;
        self.y %= rhs;
    }
}

impl Rem<i32> for Point {
    type Output = Self;

    fn rem(mut self, rhs: i32) -> Self {
        self %= rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashSet;

    #[test]
    fn test_new_point() {
        let p = Point::new(-16, 2);
        assert_eq!(p.x, -16);
        assert_eq!(p.y, 2);
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(Point::new(3, 8) + Point::new(-5, 2), Point::new(-2, 10));
        assert_eq!(Point::new(3, 8) - Point::new(-5, 2), Point::new(8, 6));

        let mut p = Point::new(1, 1);
        p += Point::new(2, 3);
        assert_eq!(p, Point::new(3, 4));
        p -= Point::new(5, 5);
        assert_eq!(p, Point::new(-2, -1));
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!(Point::new(3, -4) * 3, Point::new(9, -12));
        assert_eq!(Point::new(9, -12) / 3, Point::new(3, -4));
        assert_eq!(Point::new(7, -7) % 3, Point::new(1, -1));

        let mut p = Point::new(10, 20);
        p *= 2;
        p /= 4;
        p %= 4;
        assert_eq!(p, Point::new(1, 2));
    }

    #[test]
    fn test_negate_and_abs() {
        let p = Point::new(5, -9);
        assert_eq!(-p, Point::new(-5, 9));
        assert_eq!(p.abs(), Point::new(5, 9));
        assert_eq!(p.abs(), (-p).abs());
    }

    #[test]
    fn test_get_set_by_index() {
        let mut p = Point::new(16, 8123);
        assert_eq!(p.get(0), Ok(16));
        assert_eq!(p.get(1), Ok(8123));

        p.set(0, 2).unwrap();
        p.set(1, -4).unwrap();
        assert_eq!(p, Point::new(2, -4));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut p = Point::new(5, 6);
        assert!(matches!(
            p.get(2),
            Err(GeomError::ComponentIndexOutOfRange { index: 2, arity: 2 })
        ));
        assert!(matches!(
            p.set(2, 0),
            Err(GeomError::ComponentIndexOutOfRange { index: 2, arity: 2 })
        ));
        assert!(p.get_mut(usize::MAX).is_err());
        // Failed writes leave the point untouched.
        assert_eq!(p, Point::new(5, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(-4, -123)), "-4, -123");
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -3);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_hash_equal_points_collide_in_set() {
        let mut set = HashSet::new();
        set.insert(Point::new(1, 2));
        set.insert(Point::new(1, 2));
        set.insert(Point::new(2, 1));
        assert_eq!(set.len(), 2);
        assert_eq!(Point::new(1, 2).hash_value(), Point::new(1, 2).hash_value());
        assert_ne!(Point::new(1, 2).hash_value(), Point::new(2, 1).hash_value());
    }

    #[test]
    fn test_ivec2_conversion() {
        let p = Point::new(3, -7);
        let v: IVec2 = p.into();
        assert_eq!(v, IVec2::new(3, -7));
        assert_eq!(Point::from(v), p);
        assert_eq!(Point::from((3, -7)), p);
        assert_eq!(Point::from([3, -7]), p);
        assert_eq!(p.to_array(), [3, -7]);
    }

    #[test]
    fn test_arithmetic_laws_random() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let a = Point::new(rng.random_range(-10_000..10_000), rng.random_range(-10_000..10_000));
            let b = Point::new(rng.random_range(-10_000..10_000), rng.random_range(-10_000..10_000));
            assert_eq!(a + b - b, a);
            assert_eq!(-(-a), a);
            assert_eq!(a * 2 / 2, a);
            assert!(a.abs().x >= 0 && a.abs().y >= 0);
            assert_eq!(a.abs(), (-a).abs());
        }
    }
}
