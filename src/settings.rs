//! Demo configuration.
//!
//! Settings come from built-in defaults, overridden by an optional TOML file,
//! overridden in turn by `OATMEAL_*` environment variables (nested keys use a
//! double underscore, e.g. `OATMEAL_MAP__WALL`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use oatmeal_geom::Point;
use oatmeal_grid::{Grid, GridError};

/// Path of the configuration file loaded when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level settings of the demo binary.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// The map to search.
    pub map: MapSettings,
    /// The search to run on it.
    pub search: SearchSettings,
}

/// A character map, one string per row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Rows from top to bottom; all must have the same length.
    pub rows: Vec<String>,
    /// Cells holding this character cannot be entered.
    pub wall: char,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            rows: [
                "..........",
                ".####.###.",
                "....#...#.",
                "###.#.#.#.",
                "....#.#...",
                ".####.####",
                "..........",
            ]
            .iter()
            .map(|r| r.to_string())
            .collect(),
            wall: '#',
        }
    }
}

impl MapSettings {
    /// Builds the grid described by the rows.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidDimensions)` for an empty map and
    /// `Err(GridError::ShapeMismatch)` for ragged rows.
    pub fn to_grid(&self) -> Result<Grid<char>, GridError> {
        let x_count = self.rows.first().map_or(0, |r| r.chars().count());
        let rows = self.rows.iter().map(|r| r.chars().collect()).collect();
        Grid::from_rows(x_count, self.rows.len(), rows)
    }
}

/// Endpoints and options of the path search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// First cell of the path.
    pub start: Point,
    /// Last cell of the path.
    pub goal: Point,
    /// Guide the search with the Manhattan distance to the goal.
    pub heuristic: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            start: Point::new(0, 0),
            goal: Point::new(9, 6),
            heuristic: true,
        }
    }
}

/// Loads the settings, reading `path` if it exists.
///
/// # Errors
///
/// Returns the `ConfigError` if the file or an environment override cannot be
/// parsed or does not match [`Settings`].
pub fn load_settings(path: &str) -> Result<Settings, ConfigError> {
    load_settings_with(path, environment())
}

/// `OATMEAL_*` variables; `_` after the prefix, `__` between nested keys.
fn environment() -> Environment {
    Environment::with_prefix("OATMEAL")
        .prefix_separator("_")
        .separator("__")
}

fn load_settings_with(path: &str, env: Environment) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(env)
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!(?settings, "Successfully loaded configuration");
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
