//! Cardinal headings on the integer lattice.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::point::Point;

/// A north/south/east/west heading.
///
/// `y` grows downward, so `North` is `(0, -1)`.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// `(1, 0)`
    East = 0,
    /// `(0, -1)`
    North = 1,
    /// `(-1, 0)`
    West = 2,
    /// `(0, 1)`
    South = 3,
}

impl Direction {
    /// The four cardinal directions, counter-clockwise starting at East.
    pub const CARDINAL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Iterates East, North, West, South.
    pub fn cardinal() -> impl Iterator<Item = Direction> {
        Self::CARDINAL.into_iter()
    }

    /// Unit offset with the same heading.
    #[must_use]
    pub const fn to_point(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::North => Point::new(0, -1),
            Direction::West => Point::new(-1, 0),
            Direction::South => Point::new(0, 1),
        }
    }

    /// The opposite heading.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }
}

impl TryFrom<Point> for Direction {
    type Error = GeomError;

    fn try_from(p: Point) -> Result<Self, Self::Error> {
        match (p.x, p.y) {
            (1, 0) => Ok(Direction::East),
            (0, -1) => Ok(Direction::North),
            (-1, 0) => Ok(Direction::West),
            (0, 1) => Ok(Direction::South),
            (x, y) => Err(GeomError::NotAUnitDirection { x, y }),
        }
    }
}

impl From<Direction> for Point {
    fn from(dir: Direction) -> Self {
        dir.to_point()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::East => write!(f, "East"),
            Direction::North => write!(f, "North"),
            Direction::West => write!(f, "West"),
            Direction::South => write!(f, "South"),
        }
    }
}
