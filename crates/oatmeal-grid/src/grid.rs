//! Dense 2D grid container.
//!
//! A [`Grid`] owns `x_count * y_count` cells stored in row-major order and is
//! addressed by [`Point`] positions with `0 <= x < x_count` and
//! `0 <= y < y_count`. Its dimensions are fixed at construction.

use std::fmt;
use std::ops::{Index, IndexMut};

use oatmeal_geom::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GridError;
use crate::rect_points::GridRectPoints;
use crate::rows::Rows;

/// A dense rectangular array of cells addressed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawGrid<T>")
)]
pub struct Grid<T> {
    /// Number of columns.
    x_count: usize,
    /// Number of rows.
    y_count: usize,
    /// Cells in row-major order.
    cells: Vec<T>,
}

/// Unvalidated serialized form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid<T> {
    x_count: usize,
    y_count: usize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        Grid::from_vec(raw.x_count, raw.y_count, raw.cells)
    }
}

/// Validates grid dimensions and returns the number of cells.
fn cell_count(x_count: usize, y_count: usize) -> Result<usize, GridError> {
    if x_count == 0 || y_count == 0 {
        debug!(x_count, y_count, "rejecting empty grid");
        return Err(GridError::InvalidDimensions(
            "x_count and y_count must be non-zero",
        ));
    }

    // Every cell must be addressable by a `Point`.
    if i32::try_from(x_count).is_err() || i32::try_from(y_count).is_err() {
        return Err(GridError::InvalidDimensions(
            "Grid dimensions exceed the point coordinate range",
        ));
    }

    x_count
        .checked_mul(y_count)
        .ok_or(GridError::InvalidDimensions(
            "Grid dimensions too large, would cause overflow",
        ))
}

impl<T> Grid<T> {
    /// Creates a grid where every cell is a clone of `value`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is zero
    /// or the grid would be too large to address.
    pub fn new(x_count: usize, y_count: usize, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let count = cell_count(x_count, y_count)?;
        trace!(x_count, y_count, "creating grid from a default value");

        Ok(Self {
            x_count,
            y_count,
            cells: vec![value; count],
        })
    }

    /// Creates a grid by calling `init(x, y)` once per cell.
    ///
    /// Cells are visited in row-major order: `y` in the outer loop, `x` in the
    /// inner loop.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is zero
    /// or the grid would be too large to address.
    pub fn from_fn<F>(x_count: usize, y_count: usize, mut init: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let count = cell_count(x_count, y_count)?;
        trace!(x_count, y_count, "creating grid from an initializer");

        let mut cells = Vec::with_capacity(count);
        for y in 0..y_count {
            for x in 0..x_count {
                cells.push(init(x, y));
            }
        }

        Ok(Self {
            x_count,
            y_count,
            cells,
        })
    }

    /// Like [`Grid::from_fn`], but stops at the first error returned by `init`.
    ///
    /// # Errors
    ///
    /// Returns the first error from `init`, or `GridError::InvalidDimensions`
    /// (converted into `E`) before `init` is ever called.
    pub fn try_from_fn<E, F>(x_count: usize, y_count: usize, mut init: F) -> Result<Self, E>
    where
        E: From<GridError>,
        F: FnMut(usize, usize) -> Result<T, E>,
    {
        let count = cell_count(x_count, y_count)?;

        let mut cells = Vec::with_capacity(count);
        for y in 0..y_count {
            for x in 0..x_count {
                cells.push(init(x, y)?);
            }
        }

        Ok(Self {
            x_count,
            y_count,
            cells,
        })
    }

    /// Creates a grid from `y_count` rows of `x_count` cells each.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::ShapeMismatch)` if the number of rows differs from
    /// `y_count` or any row's length differs from `x_count`, and
    /// `Err(GridError::InvalidDimensions)` for zero or oversized dimensions.
    pub fn from_rows(x_count: usize, y_count: usize, rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let count = cell_count(x_count, y_count)?;

        if rows.len() != y_count {
            return Err(GridError::ShapeMismatch {
                expected: y_count,
                found: rows.len(),
                row: None,
            });
        }

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != x_count) {
            return Err(GridError::ShapeMismatch {
                expected: x_count,
                found: cells.len(),
                row: Some(row),
            });
        }

        let mut cells = Vec::with_capacity(count);
        for row in rows {
            cells.extend(row);
        }
        trace!(x_count, y_count, "creating grid from rows");

        Ok(Self {
            x_count,
            y_count,
            cells,
        })
    }

    /// Creates a grid that takes ownership of row-major `cells`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidDimensions)` for zero or oversized
    /// dimensions, or if `cells.len() != x_count * y_count`.
    pub fn from_vec(x_count: usize, y_count: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if cell_count(x_count, y_count)? != cells.len() {
            return Err(GridError::InvalidDimensions(
                "cell count must equal x_count * y_count",
            ));
        }

        Ok(Self {
            x_count,
            y_count,
            cells,
        })
    }

    /// Number of columns.
    pub const fn x_count(&self) -> usize {
        self.x_count
    }

    /// Number of columns, same as [`Grid::x_count`].
    pub const fn col_count(&self) -> usize {
        self.x_count
    }

    /// Number of rows.
    pub const fn y_count(&self) -> usize {
        self.y_count
    }

    /// Number of rows, same as [`Grid::y_count`].
    pub const fn row_count(&self) -> usize {
        self.y_count
    }

    /// Total number of cells.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of cells, same as [`Grid::count`].
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable cells in row-major order.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Whether `p` is a valid cell position. Never fails.
    pub fn contains_point(&self, p: Point) -> bool {
        usize::try_from(p.x).is_ok_and(|x| x < self.x_count)
            && usize::try_from(p.y).is_ok_and(|y| y < self.y_count)
    }

    /// Row-major storage offset of the cell at `p`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::XOutOfBounds)` if `p.x` is outside `[0, x_count)`,
    /// otherwise `Err(GridError::YOutOfBounds)` if `p.y` is outside `[0, y_count)`.
    pub fn offset(&self, p: Point) -> Result<usize, GridError> {
        let x = usize::try_from(p.x)
            .ok()
            .filter(|&x| x < self.x_count)
            .ok_or(GridError::XOutOfBounds {
                x: i64::from(p.x),
                x_count: self.x_count,
            })?;
        let y = usize::try_from(p.y)
            .ok()
            .filter(|&y| y < self.y_count)
            .ok_or(GridError::YOutOfBounds {
                y: i64::from(p.y),
                y_count: self.y_count,
            })?;

        Ok(y * self.x_count + x)
    }

    /// Returns the cell at `p`.
    ///
    /// # Errors
    ///
    /// See [`Grid::offset`].
    pub fn get(&self, p: Point) -> Result<&T, GridError> {
        let offset = self.offset(p)?;
        Ok(&self.cells[offset])
    }

    /// Returns a mutable reference to the cell at `p`.
    ///
    /// # Errors
    ///
    /// See [`Grid::offset`].
    pub fn get_mut(&mut self, p: Point) -> Result<&mut T, GridError> {
        let offset = self.offset(p)?;
        Ok(&mut self.cells[offset])
    }

    /// Replaces the cell at `p`, returning the previous value.
    ///
    /// # Errors
    ///
    /// See [`Grid::offset`]. Nothing is written on error.
    pub fn set(&mut self, p: Point, value: T) -> Result<T, GridError> {
        let cell = self.get_mut(p)?;
        Ok(std::mem::replace(cell, value))
    }

    /// Overwrites every cell with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// All row indices, `[0, y_count)`.
    pub const fn rows(&self) -> Rows {
        Rows::spanning(self.y_count)
    }

    /// The `count` rows starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::RowOutOfBounds)` if `start >= y_count` or
    /// `start + count > y_count`, and `Err(GridError::InvalidRange)` if
    /// `count` is zero.
    pub fn rows_range(&self, start: usize, count: usize) -> Result<Rows, GridError> {
        let out_of_bounds = GridError::RowOutOfBounds {
            start,
            count,
            y_count: self.y_count,
        };

        if start >= self.y_count {
            return Err(out_of_bounds);
        }
        let end = match start.checked_add(count) {
            Some(end) if end <= self.y_count => end,
            _ => return Err(out_of_bounds),
        };

        Rows::new(start, end)
    }

    fn check_row(&self, y: usize) -> Result<(), GridError> {
        if y < self.y_count {
            Ok(())
        } else {
            Err(GridError::YOutOfBounds {
                y: i64::try_from(y).unwrap_or(i64::MAX),
                y_count: self.y_count,
            })
        }
    }

    /// Positions of the cells in row `y`, left to right.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::YOutOfBounds)` if `y >= y_count`.
    pub fn row(&self, y: usize) -> Result<GridRectPoints, GridError> {
        self.check_row(y)?;
        // Both dimensions fit in i32 (checked at construction).
        Ok(GridRectPoints::from_parts(
            Point::new(0, y as i32),
            self.x_count as i32,
            1,
        ))
    }

    /// Cells of row `y`, left to right.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::YOutOfBounds)` if `y >= y_count`.
    pub fn row_cells(&self, y: usize) -> Result<&[T], GridError> {
        self.check_row(y)?;
        let start = y * self.x_count;
        Ok(&self.cells[start..start + self.x_count])
    }

    /// Mutable cells of row `y`, left to right.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::YOutOfBounds)` if `y >= y_count`.
    pub fn row_cells_mut(&mut self, y: usize) -> Result<&mut [T], GridError> {
        self.check_row(y)?;
        let start = y * self.x_count;
        Ok(&mut self.cells[start..start + self.x_count])
    }

    /// Cells of column `x`, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::ColumnOutOfBounds)` if `x >= x_count`.
    pub fn col_cells(&self, x: usize) -> Result<impl Iterator<Item = &T>, GridError> {
        if x >= self.x_count {
            return Err(GridError::ColumnOutOfBounds {
                x,
                x_count: self.x_count,
            });
        }
        Ok(self.cells.iter().skip(x).step_by(self.x_count))
    }

    /// Every position of the grid in row-major order.
    pub const fn positions(&self) -> GridRectPoints {
        GridRectPoints::from_parts(Point::new(0, 0), self.x_count as i32, self.y_count as i32)
    }

    /// Iterates the cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates the cells mutably in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Iterates `(position, cell)` pairs in row-major order.
    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Point, &T)> {
        self.positions().into_iter().zip(self.cells.iter())
    }

    /// Creates a grid of the same shape by applying `f` to every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            x_count: self.x_count,
            y_count: self.y_count,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `p` is out of bounds; use [`Grid::get`] for a fallible lookup.
    fn index(&self, p: Point) -> &T {
        self.get(p).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    /// # Panics
    ///
    /// Panics if `p` is out of bounds; use [`Grid::get_mut`] for a fallible lookup.
    fn index_mut(&mut self, p: Point) -> &mut T {
        self.get_mut(p).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.x_count).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
