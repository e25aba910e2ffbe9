//! Lazy enumeration of the positions inside a rectangle.
//!
//! A [`GridRectPoints`] describes a `width x height` rectangle anchored at its
//! top-left corner. Positions are produced on demand in row-major order: every
//! column of the first row, then every column of the next row, and so on.
//! Iteration ends when the cursor reaches the sentinel returned by
//! [`GridRectPoints::end`], which sits one row below the last row at the
//! starting column.

use core::iter::FusedIterator;

use oatmeal_geom::Point;
use tracing::debug;

use crate::error::GridError;

/// A rectangular region of grid positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridRectPoints {
    top_left: Point,
    width: i32,
    height: i32,
}

impl GridRectPoints {
    /// Creates the region of `width x height` positions starting at `top_left`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidRegion)` if `width` or `height` is zero,
    /// or if a position of the region (or its end sentinel) would not be
    /// representable as a [`Point`].
    pub fn new(top_left: Point, width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            debug!(width, height, "rejecting zero-area region");
            return Err(GridError::InvalidRegion("width and height must be non-zero"));
        }

        let width = i32::try_from(width)
            .map_err(|_| GridError::InvalidRegion("width exceeds the coordinate range"))?;
        let height = i32::try_from(height)
            .map_err(|_| GridError::InvalidRegion("height exceeds the coordinate range"))?;

        top_left
            .x
            .checked_add(width - 1)
            .ok_or(GridError::InvalidRegion("region extends past the largest x coordinate"))?;
        top_left
            .y
            .checked_add(height)
            .ok_or(GridError::InvalidRegion("region extends past the largest y coordinate"))?;

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    /// Region already known to be valid: positive extents that fit the
    /// coordinate range from `top_left`.
    pub(crate) const fn from_parts(top_left: Point, width: i32, height: i32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Top-left corner, the first position produced.
    pub const fn top_left(&self) -> Point {
        self.top_left
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Number of positions in the region, saturating at `usize::MAX`.
    pub const fn area(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// Whether `p` lies inside the region.
    pub const fn contains(&self, p: Point) -> bool {
        let dx = p.x as i64 - self.top_left.x as i64;
        let dy = p.y as i64 - self.top_left.y as i64;
        dx >= 0 && dy >= 0 && dx < self.width as i64 && dy < self.height as i64
    }

    /// Cursor at the first position.
    pub const fn begin(&self) -> RectCursor {
        RectCursor {
            pos: self.top_left,
            left: self.top_left.x,
            width: self.width,
        }
    }

    /// Sentinel cursor one row past the last row, at the starting column.
    pub const fn end(&self) -> RectCursor {
        RectCursor {
            pos: Point::new(self.top_left.x, self.top_left.y + self.height),
            left: self.top_left.x,
            width: self.width,
        }
    }

    /// Iterates the positions in row-major order.
    pub const fn iter(&self) -> GridRectIter {
        GridRectIter {
            cursor: self.begin(),
            end: self.end(),
        }
    }
}

/// A position inside a [`GridRectPoints`] walk.
///
/// Cursors compare equal when they point at the same position, regardless of
/// the row width they wrap at.
#[derive(Debug, Copy, Clone)]
pub struct RectCursor {
    pos: Point,
    left: i32,
    width: i32,
}

impl RectCursor {
    /// Current position.
    pub const fn position(&self) -> Point {
        self.pos
    }

    /// Moves one column right, wrapping to the first column of the next row
    /// after the last column.
    pub fn advance(&mut self) {
        if self.pos.x - self.left + 1 >= self.width {
            self.pos.x = self.left;
            self.pos.y = self.pos.y.saturating_add(1);
        } else {
            self.pos.x += 1;
        }
    }
}

impl PartialEq for RectCursor {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for RectCursor {}

/// Iterator over the positions of a [`GridRectPoints`].
#[derive(Debug, Clone)]
pub struct GridRectIter {
    cursor: RectCursor,
    end: RectCursor,
}

impl GridRectIter {
    fn remaining(&self) -> usize {
        let rows_left = (self.end.pos.y - self.cursor.pos.y) as usize;
        let done_in_row = (self.cursor.pos.x - self.cursor.left) as usize;
        rows_left.saturating_mul(self.cursor.width as usize) - done_in_row
    }
}

impl Iterator for GridRectIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.cursor == self.end {
            return None;
        }
        let pos = self.cursor.position();
        self.cursor.advance();
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridRectIter {}

impl FusedIterator for GridRectIter {}

impl IntoIterator for GridRectPoints {
    type Item = Point;
    type IntoIter = GridRectIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &GridRectPoints {
    type Item = Point;
    type IntoIter = GridRectIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
