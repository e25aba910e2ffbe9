//! Grid construction and cell access from host arguments.

use oatmeal_geom::Point;
use oatmeal_grid::Grid;
use tracing::trace;

use super::{FromArgs, HostError, HostValue};

/// How the cells of a new grid are initialized.
pub enum GridInit<'a, T> {
    /// Every cell is a clone of this value.
    Value(T),
    /// Called once per cell with `(x, y)` in row-major order. An error stops
    /// construction and is returned as is.
    Generator(Box<dyn FnMut(usize, usize) -> Result<T, HostError> + 'a>),
    /// `y_count` rows of `x_count` values each.
    Rows(Vec<Vec<T>>),
}

impl<T> std::fmt::Debug for GridInit<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridInit::Value(_) => f.write_str("GridInit::Value"),
            GridInit::Generator(_) => f.write_str("GridInit::Generator"),
            GridInit::Rows(rows) => write!(f, "GridInit::Rows({} rows)", rows.len()),
        }
    }
}

/// Creates an `x_count x y_count` grid, the host `Grid(x_count, y_count, init)`.
///
/// # Errors
///
/// Returns `Err(HostError::Grid(GridError::InvalidDimensions))` for zero or
/// oversized dimensions, `Err(HostError::Grid(GridError::ShapeMismatch))` if
/// nested rows do not match `(y_count, x_count)`, or the generator's error.
pub fn build_grid<T: Clone>(
    x_count: usize,
    y_count: usize,
    init: GridInit<'_, T>,
) -> Result<Grid<T>, HostError> {
    trace!(x_count, y_count, ?init, "building grid for host");
    match init {
        GridInit::Value(value) => Ok(Grid::new(x_count, y_count, value)?),
        GridInit::Generator(generator) => Grid::try_from_fn(x_count, y_count, generator),
        GridInit::Rows(rows) => Ok(Grid::from_rows(x_count, y_count, rows)?),
    }
}

/// Reads the cell at the position given as loose `(x, y)` arguments.
///
/// # Errors
///
/// Returns the argument conversion error or the grid's bounds error.
pub fn cell_at<'g, T>(grid: &'g Grid<T>, args: &[HostValue]) -> Result<&'g T, HostError> {
    let p = Point::from_args(args)?;
    Ok(grid.get(p)?)
}

/// Writes the cell at the position given as loose `(x, y)` arguments,
/// returning the previous value.
///
/// # Errors
///
/// Returns the argument conversion error or the grid's bounds error. Nothing
/// is written on error.
pub fn set_cell_at<T>(grid: &mut Grid<T>, args: &[HostValue], value: T) -> Result<T, HostError> {
    let p = Point::from_args(args)?;
    Ok(grid.set(p, value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oatmeal_grid::GridError;

    #[test]
    fn test_build_from_value() {
        let g = build_grid(3, 2, GridInit::Value(22)).unwrap();
        assert_eq!(g.len(), 6);
        assert!(g.iter().all(|&c| c == 22));
    }

    #[test]
    fn test_build_from_generator() {
        let g = build_grid(
            3,
            2,
            GridInit::Generator(Box::new(|x: usize, y: usize| Ok(format!("{}{}", x, y)))),
        )
        .unwrap();
        let cells: Vec<_> = g.iter().map(String::as_str).collect();
        assert_eq!(cells, vec!["00", "10", "20", "01", "11", "21"]);
    }

    #[test]
    fn test_generator_error_propagates() {
        let result = build_grid(
            2,
            2,
            GridInit::Generator(Box::new(|x: usize, _: usize| {
                if x == 1 {
                    Err(HostError::TypeMismatch {
                        expected: "an int",
                        found: HostValue::Float(0.5),
                    })
                } else {
                    Ok(0)
                }
            })),
        );
        assert!(matches!(result, Err(HostError::TypeMismatch { .. })));
    }

    #[test]
    fn test_build_from_rows() {
        let g = build_grid(2, 3, GridInit::Rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]])).unwrap();
        assert_eq!(g[Point::new(1, 2)], 6);
        assert_eq!(g.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rows_shape_mismatch_is_value_error() {
        assert!(matches!(
            build_grid(2, 3, GridInit::Rows(vec![vec![1, 2], vec![3, 4]])),
            Err(HostError::Grid(GridError::ShapeMismatch { row: None, .. }))
        ));
        assert!(matches!(
            build_grid(2, 2, GridInit::Rows(vec![vec![1, 2], vec![3, 4, 5]])),
            Err(HostError::Grid(GridError::ShapeMismatch { row: Some(1), .. }))
        ));
    }

    #[test]
    fn test_cell_access_from_args() {
        let mut g = build_grid(3, 2, GridInit::Value('.')).unwrap();
        assert_eq!(
            set_cell_at(&mut g, &[HostValue::Int(2), HostValue::Int(1)], '#'),
            Ok('.')
        );
        assert_eq!(cell_at(&g, &[HostValue::Int(2), HostValue::Int(1)]), Ok(&'#'));
        // Missing y defaults to row 0.
        assert_eq!(cell_at(&g, &[HostValue::Int(2)]), Ok(&'.'));
        assert!(matches!(
            cell_at(&g, &[HostValue::Int(3), HostValue::Int(0)]),
            Err(HostError::Grid(GridError::XOutOfBounds { .. }))
        ));
    }
}
