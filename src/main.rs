use std::collections::HashSet;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use oatmeal::host::Repr;
use oatmeal::settings::{load_settings, DEFAULT_CONFIG_PATH};
use oatmeal::{astar_search, manhattan_heuristic, Grid, NoHeuristic, Point};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let settings = load_settings(&path).with_context(|| format!("loading settings from {}", path))?;

    let grid = settings.map.to_grid().context("building the map grid")?;
    let start = settings.search.start;
    let goal = settings.search.goal;
    info!(grid = %grid.repr(), start = %start.repr(), goal = %goal.repr(), "Map loaded");

    println!("Map:");
    println!("{}", grid);

    let wall = settings.map.wall;
    let passable = move |g: &Grid<char>, _from: Point, to: Point| match g.get(to) {
        Ok(&c) if c != wall => Some(1.0),
        _ => None,
    };

    let path = if settings.search.heuristic {
        astar_search(&grid, start, goal, passable, Some(manhattan_heuristic))
    } else {
        astar_search(&grid, start, goal, passable, None::<NoHeuristic>)
    }
    .context("searching for a path")?;

    let Some(path) = path else {
        warn!(%start, %goal, "No path between start and goal");
        println!("\nNo path found from {} to {}.", start, goal);
        return Ok(());
    };

    info!(waypoints = path.len(), "Path found");

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

    println!("\nPath with {} waypoints:", path.len());
    println!("{}", shown);

    Ok(())
}
