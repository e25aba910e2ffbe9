//! Error types for the geometry library.
//!
//! This module defines the errors that can occur when accessing components of
//! the value types or converting between them.

use core::fmt;

/// Errors that can occur when working with points, vectors and directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A component was accessed by an index outside `0..arity`.
    ComponentIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of components of the accessed type (2 or 3).
        arity: usize,
    },
    /// A point could not be converted into a cardinal direction because it is
    /// not one of the four unit offsets.
    NotAUnitDirection {
        /// x component of the rejected point.
        x: i32,
        /// y component of the rejected point.
        y: i32,
    },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::ComponentIndexOutOfRange { index, arity } => write!(
                f,
                "Component index out of range: {} (valid indices are 0..{})",
                index, arity
            ),
            GeomError::NotAUnitDirection { x, y } => write!(
                f,
                "Expected a unit point but got {}, {} when converting to Direction",
                x, y
            ),
        }
    }
}

impl core::error::Error for GeomError {}
