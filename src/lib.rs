//! Geometric value types and a dense 2D grid, plus the marshaling contract a
//! scripting-language binding builds on.
//!
//! The value types live in [`oatmeal_geom`] and the grid in [`oatmeal_grid`];
//! both are re-exported here. [`host`] adapts them to a host runtime and
//! [`settings`] loads the demo binary's configuration.

pub mod host;
pub mod settings;

pub use oatmeal_geom::{
    distance, distance_as, distance_squared, Direction, FVec2, FVec3, GeomError, IVec2, IVec3,
    Point, Scalar, TVec2, TVec3, Vec2, Vec3, Vector,
};
pub use oatmeal_grid::{
    astar_search, manhattan_heuristic, uniform_cost, Bfs, Grid, GridError, GridRectIter,
    GridRectPoints, NoHeuristic, RectCursor, Rows, Visit,
};
