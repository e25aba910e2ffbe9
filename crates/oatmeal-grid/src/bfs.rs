//! Breadth-first traversal over a [`Grid`].
//!
//! The traversal itself never decides where to go next. For every in-bounds,
//! unvisited cardinal neighbour of the cell being expanded it calls a visitor,
//! and the visitor queues the positions it wants explored with
//! [`Bfs::add_frontier`]. This keeps flood fills, distance maps and region
//! labelling in caller code.

use std::collections::{HashSet, VecDeque};

use oatmeal_geom::{Direction, Point};
use tracing::debug;

use crate::error::GridError;
use crate::grid::Grid;

/// One step from an expanded cell to a neighbour, as seen by the visitor.
#[derive(Debug)]
pub struct Visit<'g, T> {
    /// Position of the cell being expanded.
    pub from_pos: Point,
    /// Value of the cell being expanded.
    pub from_cell: &'g T,
    /// Position of the neighbour.
    pub to_pos: Point,
    /// Value of the neighbour.
    pub to_cell: &'g T,
    /// Heading from `from_pos` to `to_pos`.
    pub to_dir: Direction,
}

/// Breadth-first search state: a FIFO frontier and the set of expanded cells.
#[derive(Debug)]
pub struct Bfs<'g, T> {
    grid: &'g Grid<T>,
    start: Point,
    frontier: VecDeque<Point>,
    visited: HashSet<Point>,
}

impl<'g, T> Bfs<'g, T> {
    /// Creates a search over `grid` that starts at `start`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::XOutOfBounds)` / `Err(GridError::YOutOfBounds)`
    /// if `start` is outside the grid.
    pub fn new(grid: &'g Grid<T>, start: Point) -> Result<Self, GridError> {
        grid.offset(start)?;
        Ok(Self {
            grid,
            start,
            frontier: VecDeque::from([start]),
            visited: HashSet::new(),
        })
    }

    /// The grid being searched.
    pub fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    /// Position the search starts from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Forgets every visited cell and leaves only the start in the frontier.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.frontier.clear();
        self.frontier.push_back(self.start);
    }

    /// Queues `pos` for expansion.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::AlreadyVisited)` if `pos` was already expanded,
    /// otherwise the grid's bounds error if `pos` is outside the grid.
    pub fn add_frontier(&mut self, pos: Point) -> Result<(), GridError> {
        if self.visited.contains(&pos) {
            return Err(GridError::AlreadyVisited { x: pos.x, y: pos.y });
        }
        self.grid.offset(pos)?;
        self.frontier.push_back(pos);
        Ok(())
    }

    /// Whether `pos` has been expanded.
    pub fn is_visited(&self, pos: Point) -> bool {
        self.visited.contains(&pos)
    }

    /// Number of expanded cells.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Resets the search and runs it until the frontier is empty.
    ///
    /// Cells are expanded in the order they were queued; a position queued more
    /// than once is expanded once. Neighbours are offered to `on_visit` East,
    /// North, West, South, skipping those outside the grid or already expanded.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from `on_visit`.
    pub fn run<F>(&mut self, mut on_visit: F) -> Result<(), GridError>
    where
        F: FnMut(&mut Self, Visit<'g, T>) -> Result<(), GridError>,
    {
        self.reset();
        let grid = self.grid;

        while let Some(from_pos) = self.frontier.pop_front() {
            if !self.visited.insert(from_pos) {
                continue;
            }
            let from_cell = grid.get(from_pos)?;

            for to_dir in Direction::cardinal() {
                let to_pos = from_pos + to_dir.to_point();
                if self.visited.contains(&to_pos) {
                    continue;
                }
                let Ok(to_cell) = grid.get(to_pos) else {
                    continue;
                };

                on_visit(
                    self,
                    Visit {
                        from_pos,
                        from_cell,
                        to_pos,
                        to_cell,
                        to_dir,
                    },
                )?;
            }
        }

        debug!(start = ?self.start, visited = self.visited.len(), "BFS finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn maze(rows: &[&str]) -> Grid<char> {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Grid::from_rows(rows[0].len(), rows.len(), cells).unwrap()
    }

    #[test]
    fn test_flood_fill_distances() {
        let grid = maze(&[
            "....#", //
            ".##.#", //
            "...#.", //
        ]);
        let start = Point::new(0, 0);
        let mut dist = HashMap::from([(start, 0)]);

        let mut bfs = Bfs::new(&grid, start).unwrap();
        bfs.run(|bfs, visit| {
            if *visit.to_cell != '#' && !dist.contains_key(&visit.to_pos) {
                let d = dist[&visit.from_pos] + 1;
                dist.insert(visit.to_pos, d);
                bfs.add_frontier(visit.to_pos)?;
            }
            Ok(())
        })
        .unwrap();

        assert_eq!(dist[&Point::new(3, 0)], 3);
        assert_eq!(dist[&Point::new(3, 1)], 4);
        assert_eq!(dist[&Point::new(2, 2)], 4);
        // Walled off.
        assert!(!dist.contains_key(&Point::new(4, 2)));
        assert_eq!(dist.len(), 9);
        assert_eq!(bfs.visited_count(), 9);
        assert!(bfs.is_visited(Point::new(2, 2)));
    }

    #[test]
    fn test_neighbours_offered_in_cardinal_order() {
        let grid = Grid::new(3, 1, 0u8).unwrap();
        let mut seen = Vec::new();
        let mut bfs = Bfs::new(&grid, Point::new(1, 0)).unwrap();
        bfs.run(|_, visit| {
            seen.push((visit.from_pos, visit.to_pos, visit.to_dir));
            Ok(())
        })
        .unwrap();

        // Nothing queued, so only the start is expanded.
        assert_eq!(
            seen,
            vec![
                (Point::new(1, 0), Point::new(2, 0), Direction::East),
                (Point::new(1, 0), Point::new(0, 0), Direction::West),
            ]
        );
        assert_eq!(bfs.visited_count(), 1);
    }

    #[test]
    fn test_add_frontier_rejects_visited_and_out_of_bounds() {
        let grid = Grid::new(2, 2, '.').unwrap();
        let start = Point::new(0, 0);
        let mut bfs = Bfs::new(&grid, start).unwrap();
        bfs.run(|_, _| Ok(())).unwrap();

        assert!(matches!(
            bfs.add_frontier(start),
            Err(GridError::AlreadyVisited { x: 0, y: 0 })
        ));
        assert!(matches!(
            bfs.add_frontier(Point::new(2, 0)),
            Err(GridError::XOutOfBounds { x: 2, x_count: 2 })
        ));
        assert!(matches!(
            bfs.add_frontier(Point::new(0, -1)),
            Err(GridError::YOutOfBounds { y: -1, .. })
        ));
        assert!(bfs.add_frontier(Point::new(1, 1)).is_ok());
    }

    #[test]
    fn test_reset_clears_visited() {
        let grid = Grid::new(2, 2, '.').unwrap();
        let start = Point::new(1, 0);
        let mut bfs = Bfs::new(&grid, start).unwrap();
        bfs.run(|_, _| Ok(())).unwrap();
        assert!(bfs.is_visited(start));

        bfs.reset();
        assert_eq!(bfs.visited_count(), 0);
        assert!(bfs.add_frontier(start).is_ok());
        assert_eq!(bfs.start(), start);
    }

    #[test]
    fn test_visitor_error_stops_search() {
        let grid = Grid::new(4, 4, '.').unwrap();
        let mut calls = 0;
        let mut bfs = Bfs::new(&grid, Point::new(0, 0)).unwrap();
        let result = bfs.run(|_, _| {
            calls += 1;
            Err(GridError::InvalidRegion("stop"))
        });
        assert_eq!(result, Err(GridError::InvalidRegion("stop")));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let grid = Grid::new(2, 2, '.').unwrap();
        assert!(matches!(
            Bfs::new(&grid, Point::new(0, 2)),
            Err(GridError::YOutOfBounds { y: 2, y_count: 2 })
        ));
    }
}
