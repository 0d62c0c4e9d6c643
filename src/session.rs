use grid_util::point::Point;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::astar::SearchStats;
use crate::edit::Brush;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::grid::{CellState, Grid};
use crate::path::PathResult;
use crate::pathfinder::Pathfinder;

/// Settings for a [Session].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub cols: i32,
    pub rows: i32,
    /// Seed for random endpoint placement. [None] seeds from the operating system.
    pub seed: Option<u64>,
    pub max_expansions: Option<usize>,
    pub check_components: bool,
}

impl Default for SessionConfig {
    /// An 800x600 canvas drawn with 10 pixel cells.
    fn default() -> SessionConfig {
        SessionConfig {
            cols: 80,
            rows: 60,
            seed: None,
            max_expansions: None,
            check_components: false,
        }
    }
}

impl SessionConfig {
    pub fn with_dimensions(mut self, cols: i32, rows: i32) -> SessionConfig {
        self.cols = cols;
        self.rows = rows;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> SessionConfig {
        self.seed = Some(seed);
        self
    }
    pub fn with_max_expansions(mut self, limit: usize) -> SessionConfig {
        self.max_expansions = Some(limit);
        self
    }
    pub fn with_component_check(mut self, enabled: bool) -> SessionConfig {
        self.check_components = enabled;
        self
    }
}

/// The single owner of all editable state. Each tick applies the pending edits through the
/// mutating methods and then calls [tick](Session::tick), which searches from scratch.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    pathfinder: Pathfinder,
    rng: StdRng,
    last_path: PathResult,
    last_stats: SearchStats,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Session> {
        let grid = Grid::new(config.cols, config.rows)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            "Session started on a {}x{} grid (seed {:?})",
            config.cols, config.rows, config.seed
        );
        Ok(Session {
            grid,
            pathfinder: Pathfinder {
                max_expansions: config.max_expansions,
                check_components: config.check_components,
            },
            rng,
            last_path: PathResult::empty(),
            last_stats: SearchStats::default(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn cell(&self, point: &Point) -> Result<CellState> {
        self.grid.cell(point)
    }
    pub fn current(&self) -> (Option<Point>, Option<Point>) {
        self.grid.current()
    }

    /// Marks (`create`) or clears an obstacle. See [Grid::set_obstacle].
    pub fn toggle_obstacle(&mut self, point: Point, create: bool) -> Result<bool> {
        self.grid.set_obstacle(point, create)
    }
    pub fn clear_obstacles(&mut self) {
        self.grid.clear_obstacles()
    }
    pub fn set_start(&mut self, point: Point) -> Result<()> {
        self.grid.set_start(point)
    }
    pub fn set_end(&mut self, point: Point) -> Result<()> {
        self.grid.set_end(point)
    }
    pub fn random_start(&mut self) -> Result<Point> {
        self.grid.place_random(Endpoint::Start, &mut self.rng)
    }
    pub fn random_end(&mut self) -> Result<Point> {
        self.grid.place_random(Endpoint::End, &mut self.rng)
    }
    /// Applies a [Brush] stroke centred on `center` and returns the number of changed cells.
    pub fn paint(&mut self, brush: &Brush, center: Point) -> Result<usize> {
        brush.apply(&mut self.grid, center)
    }

    /// Searches for a path between the current endpoints. Empty while either endpoint is
    /// missing or when the end is unreachable.
    pub fn compute_path(&self) -> PathResult {
        self.compute_path_with_stats().0
    }

    fn compute_path_with_stats(&self) -> (PathResult, SearchStats) {
        match self.grid.endpoints().both() {
            Some((start, end)) => self.pathfinder.find_path_with_stats(&self.grid, start, end),
            None => (PathResult::empty(), SearchStats::default()),
        }
    }

    /// Whether the end can currently be reached from the start.
    pub fn reachable(&self) -> bool {
        self.grid
            .endpoints()
            .both()
            .is_some_and(|(start, end)| Pathfinder::reachable(&self.grid, &start, &end))
    }

    /// Recomputes the path for the current state and keeps it for drawing.
    pub fn tick(&mut self) -> &PathResult {
        let (path, stats) = self.compute_path_with_stats();
        debug!(
            "Tick: {} cells on path, {} nodes expanded",
            path.len(),
            stats.expanded
        );
        self.last_path = path;
        self.last_stats = stats;
        &self.last_path
    }
    /// The path computed by the latest [tick](Session::tick).
    pub fn last_path(&self) -> &PathResult {
        &self.last_path
    }
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}
