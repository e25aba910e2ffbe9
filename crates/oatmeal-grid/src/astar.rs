//! A* shortest-path search over a [`Grid`].
//!
//! Movement is restricted to the four cardinal neighbours of a cell. The caller
//! prices each move with a cost function and may supply a heuristic that
//! estimates the remaining cost to the goal.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use oatmeal_geom::{Direction, Point};
use tracing::debug;

use crate::error::GridError;
use crate::grid::Grid;

/// Heuristic type to name when calling [`astar_search`] without a heuristic:
/// `astar_search(&grid, start, goal, cost, None::<NoHeuristic>)`.
pub type NoHeuristic = fn(Point, Point) -> f64;

/// Entry in the search frontier, ordered so the `BinaryHeap` pops the lowest
/// priority first and, among equal priorities, the earliest insertion.
#[derive(Debug, Clone, Copy)]
struct FrontierNode {
    priority: f64,
    order: u64,
    pos: Point,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

/// Min-priority queue with first-in-first-out tie breaking.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierNode>,
    counter: u64,
}

impl Frontier {
    fn push(&mut self, pos: Point, priority: f64) {
        self.heap.push(FrontierNode {
            priority,
            order: self.counter,
            pos,
        });
        self.counter += 1;
    }

    fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|node| node.pos)
    }
}

/// Finds a cheapest path from `start` to `goal`.
///
/// # Arguments
/// * `grid` - The grid to search; only its bounds are used directly.
/// * `start` - First position of the path.
/// * `goal` - Last position of the path.
/// * `cell_cost` - `cell_cost(grid, from, to)` returns the cost of moving between
///   adjacent cells, or `None` if the move is not allowed. Costs must be
///   strictly positive.
/// * `heuristic` - Optional estimate `h(pos, goal)` of the remaining cost;
///   must be non-negative.
///
/// # Returns
/// * `Ok(Some(path))` - Positions from `start` to `goal`, both inclusive.
/// * `Ok(None)` - The goal cannot be reached.
///
/// # Errors
///
/// Returns `Err(GridError::XOutOfBounds)` / `Err(GridError::YOutOfBounds)` if
/// `start` or `goal` is outside the grid, and `Err(GridError::InvalidCost)` if
/// a cost or heuristic value is out of range.
pub fn astar_search<T, C, H>(
    grid: &Grid<T>,
    start: Point,
    goal: Point,
    mut cell_cost: C,
    mut heuristic: Option<H>,
) -> Result<Option<Vec<Point>>, GridError>
where
    C: FnMut(&Grid<T>, Point, Point) -> Option<f64>,
    H: FnMut(Point, Point) -> f64,
{
    grid.offset(start)?;
    grid.offset(goal)?;

    let mut frontier = Frontier::default();
    frontier.push(start, 0.0);

    let mut cost_so_far: HashMap<Point, f64> = HashMap::from([(start, 0.0)]);
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut nodes_explored = 0usize;
    let mut reached_goal = false;

    while let Some(current) = frontier.pop() {
        nodes_explored += 1;

        if current == goal {
            reached_goal = true;
            break;
        }

        let current_cost = cost_so_far.get(&current).copied().unwrap_or(0.0);

        for dir in Direction::cardinal() {
            let neighbor = current + dir.to_point();
            if !grid.contains_point(neighbor) {
                continue;
            }

            let Some(move_cost) = cell_cost(grid, current, neighbor) else {
                continue;
            };
            // Also rejects NaN.
            if !(move_cost > 0.0) {
                return Err(GridError::InvalidCost("cell cost must be larger than zero"));
            }

            let new_cost = current_cost + move_cost;
            match cost_so_far.entry(neighbor) {
                Entry::Occupied(mut known) => {
                    if new_cost >= *known.get() {
                        continue;
                    }
                    known.insert(new_cost);
                }
                Entry::Vacant(slot) => {
                    slot.insert(new_cost);
                }
            }

            let mut estimated_cost = new_cost;
            if let Some(h) = heuristic.as_mut() {
                let estimate = h(neighbor, goal);
                if !(estimate >= 0.0) {
                    return Err(GridError::InvalidCost("heuristic must not be negative"));
                }
                estimated_cost += estimate;
            }

            frontier.push(neighbor, estimated_cost);
            came_from.insert(neighbor, current);
        }
    }

    if !reached_goal {
        debug!(nodes_explored, ?start, ?goal, "A* search found no path");
        return Ok(None);
    }

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();

    debug!(nodes_explored, path_length = path.len(), "A* search finished");
    Ok(Some(path))
}

/// Cost function allowing every move at unit cost.
pub fn uniform_cost<T>(_grid: &Grid<T>, _from: Point, _to: Point) -> Option<f64> {
    Some(1.0)
}

/// Manhattan distance heuristic, admissible for unit-cost cardinal moves.
pub fn manhattan_heuristic(from: Point, to: Point) -> f64 {
    f64::from(from.manhattan_distance(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(rows: &[&str]) -> Grid<char> {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Grid::from_rows(rows[0].len(), rows.len(), cells).unwrap()
    }

    fn open_cells(grid: &Grid<char>, _from: Point, to: Point) -> Option<f64> {
        match grid.get(to) {
            Ok('#') | Err(_) => None,
            Ok(_) => Some(1.0),
        }
    }

    fn assert_connected(path: &[Point]) {
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
    }

    #[test]
    fn test_straight_line_path() {
        let grid = Grid::new(5, 1, '.').unwrap();
        let path = astar_search(
            &grid,
            Point::new(0, 0),
            Point::new(4, 0),
            uniform_cost,
            Some(manhattan_heuristic),
        )
        .unwrap()
        .unwrap();
        assert_eq!(path, (0..5).map(|x| Point::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_path_around_wall() {
        let grid = maze(&[
            ".....", //
            ".###.", //
            "...#.", //
        ]);
        let start = Point::new(0, 2);
        let goal = Point::new(4, 2);

        let path = astar_search(&grid, start, goal, open_cells, Some(manhattan_heuristic))
            .unwrap()
            .unwrap();

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_connected(&path);
        assert!(path.iter().all(|&p| grid[p] != '#'));
        // Up the left side, across the top and down the right side.
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_without_heuristic_finds_same_length() {
        let grid = maze(&[
            "..#..", //
            "..#..", //
            ".....", //
        ]);
        let path = astar_search(
            &grid,
            Point::new(0, 0),
            Point::new(4, 0),
            open_cells,
            None::<NoHeuristic>,
        )
        .unwrap()
        .unwrap();
        assert_connected(&path);
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_unreachable_goal() {
        let grid = maze(&[
            "..#..", //
            "..#..", //
        ]);
        let result = astar_search(
            &grid,
            Point::new(0, 0),
            Point::new(4, 1),
            open_cells,
            Some(manhattan_heuristic),
        )
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_start_is_goal() {
        let grid = Grid::new(2, 2, '.').unwrap();
        let p = Point::new(1, 1);
        let path = astar_search(&grid, p, p, uniform_cost, None::<NoHeuristic>).unwrap();
        assert_eq!(path, Some(vec![p]));
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let grid = Grid::new(2, 2, '.').unwrap();
        assert!(matches!(
            astar_search(&grid, Point::new(2, 0), Point::new(0, 0), uniform_cost, None::<NoHeuristic>),
            Err(GridError::XOutOfBounds { .. })
        ));
        assert!(matches!(
            astar_search(&grid, Point::new(0, 0), Point::new(0, -1), uniform_cost, None::<NoHeuristic>),
            Err(GridError::YOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_invalid_costs_rejected() {
        let grid = Grid::new(3, 3, '.').unwrap();
        assert!(matches!(
            astar_search(
                &grid,
                Point::new(0, 0),
                Point::new(2, 2),
                |_: &Grid<char>, _, _| Some(0.0),
                None::<NoHeuristic>,
            ),
            Err(GridError::InvalidCost(_))
        ));
        assert!(matches!(
            astar_search(
                &grid,
                Point::new(0, 0),
                Point::new(2, 2),
                uniform_cost,
                Some(|_: Point, _: Point| -1.0),
            ),
            Err(GridError::InvalidCost(_))
        ));
    }

    #[test]
    fn test_heuristic_estimates_from_neighbour_to_goal() {
        let grid = Grid::new(4, 1, '.').unwrap();
        let goal = Point::new(3, 0);
        let mut calls = Vec::new();
        let path = astar_search(
            &grid,
            Point::new(0, 0),
            goal,
            uniform_cost,
            Some(|pos: Point, target: Point| {
                calls.push((pos, target));
                f64::from(pos.manhattan_distance(target))
            }),
        )
        .unwrap()
        .unwrap();

        assert_eq!(path.len(), 4);
        assert!(calls.iter().all(|&(_, target)| target == goal));
        // Stepping onto the goal gives a zero estimate, which is accepted.
        assert!(calls.contains(&(goal, goal)));
    }

    #[test]
    fn test_weighted_costs_prefer_cheap_route() {
        // Crossing the middle column costs 10 except on the bottom row.
        let grid = Grid::from_fn(3, 3, |x, y| if x == 1 && y < 2 { 10.0 } else { 1.0 }).unwrap();
        let path = astar_search(
            &grid,
            Point::new(0, 0),
            Point::new(2, 0),
            |g: &Grid<f64>, _, to| g.get(to).ok().copied(),
            None::<NoHeuristic>,
        )
        .unwrap()
        .unwrap();
        assert!(path.contains(&Point::new(1, 2)));
        assert!(!path.contains(&Point::new(1, 0)));
    }
}
