use grid_util::grid::{BoolGrid, Grid as ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::astar::{astar, SearchStats};
use crate::grid::Grid;
use crate::path::PathResult;

/// Up, down, left, right. Successors are generated in this order.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells: the
/// exact cost of an unobstructed 4-directional path, hence admissible and consistent.
pub fn manhattan(p1: &Point, p2: &Point) -> i32 {
    p1.manhattan_distance(p2)
}

/// A* over the 4-neighbourhood of a [Grid] with unit step cost. Every call is a fresh search;
/// nothing is carried over between invocations.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    /// Upper bound on expanded nodes per search. [None] searches until the frontier is empty.
    pub max_expansions: Option<usize>,
    /// Rejects start/end pairs on different connected components before searching.
    pub check_components: bool,
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder::default()
    }

    /// The walkable cells sharing an edge with `point`, each with step cost 1.
    pub fn neighbours<'a>(
        grid: &'a Grid,
        point: &Point,
    ) -> impl Iterator<Item = (Point, i32)> + 'a {
        let point = *point;
        NEUMANN_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(move |p| grid.is_walkable(p))
            .map(|p| (p, 1))
    }

    /// Computes a shortest path from `start` to `end`. Returns the empty [PathResult] when no
    /// path exists, including when either cell is outside the grid or blocked.
    pub fn find_path(&self, grid: &Grid, start: Point, end: Point) -> PathResult {
        self.find_path_with_stats(grid, start, end).0
    }

    /// [find_path](Self::find_path) together with the counters of the search.
    pub fn find_path_with_stats(
        &self,
        grid: &Grid,
        start: Point,
        end: Point,
    ) -> (PathResult, SearchStats) {
        if !grid.is_walkable(&start) || !grid.is_walkable(&end) {
            debug!("{:?} or {:?} is not walkable, skipping search", start, end);
            return (PathResult::empty(), SearchStats::default());
        }
        if self.check_components && !Components::new(grid).connected(&start, &end) {
            debug!("{:?} is not reachable from {:?}", end, start);
            return (PathResult::empty(), SearchStats::default());
        }
        let (result, stats) = astar(
            &start,
            |node| Pathfinder::neighbours(grid, node),
            |point| manhattan(point, &end),
            |point| *point == end,
            self.max_expansions,
        );
        match result {
            Some((points, cost)) => {
                debug!(
                    "Path from {:?} to {:?} of cost {} after {} expansions",
                    start, end, cost, stats.expanded
                );
                (PathResult::from(points), stats)
            }
            None => {
                debug!(
                    "No path from {:?} to {:?} after {} expansions",
                    start, end, stats.expanded
                );
                (PathResult::empty(), stats)
            }
        }
    }

    /// Checks whether `end` can be reached from `start` without running a search.
    pub fn reachable(grid: &Grid, start: &Point, end: &Point) -> bool {
        Components::new(grid).connected(start, end)
    }
}

/// [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of the walkable
/// cells of a [Grid] under 4-directional movement, kept in a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    /// Obstacle flags of the grid at construction time, indexed like the [UnionFind].
    blocked: BoolGrid,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn new(grid: &Grid) -> Components {
        let blocked = grid.flags().clone();
        let mut components = UnionFind::new(blocked.width() * blocked.height());
        for (point, state) in grid.cells() {
            if state.is_obstacle {
                continue;
            }
            let ix = blocked.get_ix_point(&point);
            // Linking towards the right and downwards covers every edge once.
            for neighbour in [
                Point::new(point.x + 1, point.y),
                Point::new(point.x, point.y + 1),
            ] {
                if grid.is_walkable(&neighbour) {
                    components.union(ix, blocked.get_ix_point(&neighbour));
                }
            }
        }
        Components {
            components,
            blocked,
        }
    }

    /// Retrieves the component id of a walkable [Point].
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.free_ix(point).map(|ix| self.components.find(ix))
    }

    /// Whether both cells are walkable and on the same component.
    pub fn connected(&self, start: &Point, end: &Point) -> bool {
        match (self.free_ix(start), self.free_ix(end)) {
            (Some(s), Some(e)) => self.components.equiv(s, e),
            _ => false,
        }
    }

    fn free_ix(&self, point: &Point) -> Option<usize> {
        (self.blocked.point_in_bounds(*point) && !self.blocked.get_point(*point))
            .then(|| self.blocked.get_ix_point(point))
    }
}
