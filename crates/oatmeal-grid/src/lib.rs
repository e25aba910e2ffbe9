#![warn(missing_docs)]
//! Dense 2D grids addressed by integer [`Point`]s.
//!
//! [`Grid`] stores its cells row-major with dimensions fixed at construction.
//! [`Rows`] and [`GridRectPoints`] describe row ranges and rectangular regions
//! without borrowing the grid, [`astar_search`] finds cheapest paths over it
//! and [`Bfs`] drives visitor-based breadth-first traversals.

pub mod astar;
pub mod bfs;
pub mod error;
pub mod grid;
pub mod rect_points;
pub mod rows;

pub use astar::{astar_search, manhattan_heuristic, uniform_cost, NoHeuristic};
pub use bfs::{Bfs, Visit};
pub use error::GridError;
pub use grid::Grid;
pub use oatmeal_geom::Point;
pub use rect_points::{GridRectIter, GridRectPoints, RectCursor};
pub use rows::Rows;
