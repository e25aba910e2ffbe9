//! This module defines the error types used by the `oatmeal-grid` crate.

#![warn(missing_docs)]

/// Error type for grid operations.
///
/// Each variant identifies which invariant a call violated, so callers can
/// tell a bad x coordinate from a bad y coordinate or a malformed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid width or height is zero, or their product overflows.
    InvalidDimensions(&'static str),
    /// The x coordinate is negative or not less than `x_count`.
    XOutOfBounds {
        /// The rejected x coordinate.
        x: i64,
        /// Width of the grid.
        x_count: usize,
    },
    /// The y coordinate is negative or not less than `y_count`.
    YOutOfBounds {
        /// The rejected y coordinate.
        y: i64,
        /// Height of the grid.
        y_count: usize,
    },
    /// A requested run of rows does not fit inside the grid.
    RowOutOfBounds {
        /// First requested row.
        start: usize,
        /// Number of requested rows.
        count: usize,
        /// Height of the grid.
        y_count: usize,
    },
    /// A requested column does not exist.
    ColumnOutOfBounds {
        /// The rejected column.
        x: usize,
        /// Width of the grid.
        x_count: usize,
    },
    /// A range whose end does not exceed its beginning.
    InvalidRange {
        /// Inclusive start.
        begin: usize,
        /// Exclusive end.
        end: usize,
    },
    /// A rectangular region with zero area or one that leaves the coordinate space.
    InvalidRegion(&'static str),
    /// Initial rows do not match the declared grid shape.
    ShapeMismatch {
        /// Expected number of rows (`y_count`) or columns (`x_count`).
        expected: usize,
        /// Length actually supplied.
        found: usize,
        /// Offending row, or `None` when the row count itself is wrong.
        row: Option<usize>,
    },
    /// A position was queued for a breadth-first search after it was visited.
    AlreadyVisited {
        /// x coordinate of the position.
        x: i32,
        /// y coordinate of the position.
        y: i32,
    },
    /// A search step cost was not positive or a heuristic estimate was negative.
    InvalidCost(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            GridError::XOutOfBounds { x, x_count } => {
                write!(f, "x offset out of bounds: 0 <= {} < {}", x, x_count)
            }
            GridError::YOutOfBounds { y, y_count } => {
                write!(f, "y offset out of bounds: 0 <= {} < {}", y, y_count)
            }
            GridError::RowOutOfBounds {
                start,
                count,
                y_count,
            } => write!(
                f,
                "Rows {}..{} out of bounds for a grid with {} rows",
                start,
                start.saturating_add(*count),
                y_count
            ),
            GridError::ColumnOutOfBounds { x, x_count } => {
                write!(f, "Column {} out of bounds for a grid with {} columns", x, x_count)
            }
            GridError::InvalidRange { begin, end } => {
                write!(f, "Invalid range: end {} must be larger than begin {}", end, begin)
            }
            GridError::InvalidRegion(msg) => write!(f, "Invalid region: {}", msg),
            GridError::ShapeMismatch {
                expected,
                found,
                row: None,
            } => write!(f, "Grid initial rows: expected {} rows, got {}", expected, found),
            GridError::ShapeMismatch {
                expected,
                found,
                row: Some(row),
            } => write!(
                f,
                "Grid initial row {}: expected {} columns, got {}",
                row, expected, found
            ),
            GridError::AlreadyVisited { x, y } => {
                write!(f, "Cell position {}, {} already visited", x, y)
            }
            GridError::InvalidCost(msg) => write!(f, "Invalid search cost: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
