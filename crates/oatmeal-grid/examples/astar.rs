use std::collections::HashSet;

use oatmeal_grid::{astar_search, manhattan_heuristic, Grid, Point};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // 10x10 map, '#' is a wall
    let rows = [
        "..........",
        ".##....##.",
        "....#.....",
        "..####.#..",
        ".....#.#..",
        ".###.#.##.",
        "...#......",
        ".#.#.###..",
        ".#......#.",
        "...###....",
    ];
    let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    let grid = Grid::from_rows(10, 10, cells)?;

    let start = Point::new(0, 0);
    let goal = Point::new(9, 9);

    println!("Grid:");
    println!("{}", grid);
    println!("\nStart: {}", start);
    println!("Goal: {}", goal);

    let walls = |g: &Grid<char>, _from: Point, to: Point| match g.get(to) {
        Ok('#') | Err(_) => None,
        Ok(_) => Some(1.0),
    };

    match astar_search(&grid, start, goal, walls, Some(manhattan_heuristic))? {
        Some(path) => {
            println!("\nPath found with {} waypoints!", path.len());

            let on_path: HashSet<Point> = path.iter().copied().collect();
            let mut shown = grid.clone();
            for p in grid.positions() {
                if p == start {
                    shown[p] = 'S';
                } else if p == goal {
                    shown[p] = 'G';
                } else if on_path.contains(&p) {
                    shown[p] = '*';
                }
            }

            println!("\nGrid with path:");
            println!("{}", shown);
        }
        None => println!("\nNo path found."),
    }

    Ok(())
}
