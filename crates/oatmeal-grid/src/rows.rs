//! Row index ranges.

use core::ops::Range;

use crate::error::GridError;

/// A non-empty, half-open range `[begin, end)` of grid row indices.
///
/// `Rows` is `Copy`; iterating a copy leaves the original untouched, so the
/// same range can be walked any number of times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rows {
    begin: usize,
    end: usize,
}

impl Rows {
    /// Creates the row range `[begin, end)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidRange)` if `end <= begin`; empty and
    /// inverted ranges are rejected rather than treated as empty.
    pub fn new(begin: usize, end: usize) -> Result<Self, GridError> {
        if end <= begin {
            return Err(GridError::InvalidRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// `[0, y_count)`. Callers guarantee `y_count > 0`.
    pub(crate) const fn spanning(y_count: usize) -> Self {
        Self {
            begin: 0,
            end: y_count,
        }
    }

    /// First row in the range.
    pub const fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last row in the range.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of rows in the range, always at least one.
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether `row` lies inside the range.
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.begin && row < self.end
    }

    /// Iterates the row indices in ascending order.
    pub fn iter(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl IntoIterator for Rows {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Rows {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_iterate_half_open_range() {
        let rows = Rows::new(2, 5).unwrap();
        assert_eq!(rows.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(rows.len(), 3);
        assert!(rows.contains(2));
        assert!(!rows.contains(5));
    }

    #[test]
    fn test_rows_are_restartable() {
        let rows = Rows::new(0, 3).unwrap();
        let first: Vec<_> = rows.into_iter().collect();
        let second: Vec<_> = (&rows).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_or_inverted_range_rejected() {
        assert!(matches!(
            Rows::new(5, 5),
            Err(GridError::InvalidRange { begin: 5, end: 5 })
        ));
        assert!(matches!(
            Rows::new(5, 4),
            Err(GridError::InvalidRange { begin: 5, end: 4 })
        ));
    }
}
