use crate::endpoints::{Endpoint, EndpointRegistry};
use crate::error::{GridError, Result};
use crate::obstacles::ObstacleSet;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid as ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, trace};
use rand::Rng;

/// Read-only copy of the state of a single cell, handed out for drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellState {
    pub is_obstacle: bool,
    pub is_start: bool,
    pub is_end: bool,
}

/// [Grid] owns every cell of a fixed `cols x rows` board. Obstacle flags live in a dense
/// [BoolGrid] (occupied is [true]) that the search reads, mirrored by an [ObstacleSet] for
/// enumeration. The [EndpointRegistry] holds the start and end markers. All three are only
/// mutated here, so a start or end cell is never blocked and the set never disagrees with the
/// flags.
#[derive(Clone, Debug)]
pub struct Grid {
    blocked: BoolGrid,
    obstacles: ObstacleSet,
    endpoints: EndpointRegistry,
}

impl Grid {
    /// Creates an obstacle-free grid without endpoints.
    pub fn new(cols: i32, rows: i32) -> Result<Grid> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        debug!("Creating {}x{} grid", cols, rows);
        Ok(Grid {
            blocked: BoolGrid::new(cols as usize, rows as usize, false),
            obstacles: ObstacleSet::new(),
            endpoints: EndpointRegistry::new(),
        })
    }
    pub fn cols(&self) -> usize {
        self.blocked.width()
    }
    pub fn rows(&self) -> usize {
        self.blocked.height()
    }
    /// The dense obstacle flags, for derived indices such as
    /// [Components](crate::pathfinder::Components).
    pub(crate) fn flags(&self) -> &BoolGrid {
        &self.blocked
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        self.blocked.point_in_bounds(*point)
    }
    fn check_bounds(&self, point: &Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                cols: self.cols(),
                rows: self.rows(),
            })
        }
    }

    /// Obstacle flag of an in-bounds cell; cells outside the grid report [false].
    pub fn is_obstacle(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.blocked.get_point(*point)
    }
    pub fn is_start(&self, point: &Point) -> bool {
        self.endpoints.is_start(point)
    }
    pub fn is_end(&self, point: &Point) -> bool {
        self.endpoints.is_end(point)
    }
    /// Whether a path may step onto `point`.
    pub fn is_walkable(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.blocked.get_point(*point)
    }
    pub fn cell(&self, point: &Point) -> Result<CellState> {
        self.check_bounds(point)?;
        Ok(CellState {
            is_obstacle: self.is_obstacle(point),
            is_start: self.is_start(point),
            is_end: self.is_end(point),
        })
    }
    /// All cells in row-major order, top row first.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        iproduct!(0..self.rows() as i32, 0..self.cols() as i32).map(move |(y, x)| {
            let point = Point::new(x, y);
            let state = CellState {
                is_obstacle: self.blocked.get_point(point),
                is_start: self.is_start(&point),
                is_end: self.is_end(&point),
            };
            (point, state)
        })
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
    pub fn endpoints(&self) -> &EndpointRegistry {
        &self.endpoints
    }
    pub fn current(&self) -> (Option<Point>, Option<Point>) {
        self.endpoints.current()
    }

    /// Sets or clears the obstacle flag of a cell and returns whether anything changed. Start
    /// and end cells are rejected with [GridError::ProtectedCell] and left untouched.
    pub fn set_obstacle(&mut self, point: Point, active: bool) -> Result<bool> {
        self.check_bounds(&point)?;
        if self.endpoints.is_endpoint(&point) {
            return Err(GridError::ProtectedCell {
                x: point.x,
                y: point.y,
            });
        }
        let changed = if active {
            self.obstacles.insert(point)
        } else {
            self.obstacles.remove(&point)
        };
        if changed {
            trace!("Obstacle at {:?} set to {}", point, active);
            self.blocked.set_point(point, active);
        }
        debug_assert_eq!(self.is_obstacle(&point), self.obstacles.contains(&point));
        Ok(changed)
    }
    /// Removes every obstacle, keeping the endpoints in place.
    pub fn clear_obstacles(&mut self) {
        for point in self.obstacles.drain() {
            self.blocked.set_point(point, false);
        }
    }

    pub fn set_start(&mut self, point: Point) -> Result<()> {
        self.place(Endpoint::Start, point)
    }
    pub fn set_end(&mut self, point: Point) -> Result<()> {
        self.place(Endpoint::End, point)
    }
    /// Places an endpoint, replacing the previous marker of that kind. The target cell stops
    /// being an obstacle.
    pub fn place(&mut self, which: Endpoint, point: Point) -> Result<()> {
        self.check_bounds(&point)?;
        if self.obstacles.remove(&point) {
            self.blocked.set_point(point, false);
        }
        let previous = self.endpoints.replace(which, point);
        debug!("{:?} moved from {:?} to {:?}", which, previous, point);
        Ok(())
    }
    /// Places an endpoint on a uniformly drawn cell and returns it. The draw may land on the
    /// other endpoint, which is then taken over.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        which: Endpoint,
        rng: &mut R,
    ) -> Result<Point> {
        let point = Point::new(
            rng.gen_range(0..self.cols() as i32),
            rng.gen_range(0..self.rows() as i32),
        );
        self.place(which, point).map(|_| point)
    }
    pub fn random_start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Point> {
        self.place_random(Endpoint::Start, rng)
    }
    pub fn random_end<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Point> {
        self.place_random(Endpoint::End, rng)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() as i32 {
            let row = (0..self.cols() as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if self.is_start(&p) {
                        'S'
                    } else if self.is_end(&p) {
                        'E'
                    } else if self.is_obstacle(&p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_non_positive_dimensions() {
        for (cols, rows) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
            assert_eq!(
                Grid::new(cols, rows).unwrap_err(),
                GridError::InvalidDimensions { cols, rows }
            );
        }
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn obstacle_flags_follow_the_set() {
        let mut grid = Grid::new(4, 3).unwrap();
        let p = Point::new(2, 1);
        assert!(grid.set_obstacle(p, true).unwrap());
        assert!(!grid.set_obstacle(p, true).unwrap());
        assert!(grid.is_obstacle(&p));
        assert!(grid.obstacles().contains(&p));
        assert!(grid.set_obstacle(p, false).unwrap());
        assert!(!grid.is_obstacle(&p));
        assert!(grid.obstacles().is_empty());
    }

    #[test]
    fn out_of_bounds_edits_are_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        let outside = Point::new(3, 0);
        assert!(!grid.in_bounds(&outside));
        assert_eq!(
            grid.set_obstacle(outside, true),
            Err(GridError::OutOfBounds {
                x: 3,
                y: 0,
                cols: 3,
                rows: 3
            })
        );
        assert!(grid.set_start(Point::new(0, -1)).is_err());
        assert!(grid.cell(&Point::new(-1, 0)).is_err());
        assert_eq!(grid.current(), (None, None));
        assert_eq!(grid.obstacle_count(), 0);
    }

    #[test]
    fn endpoints_are_protected() {
        let mut grid = Grid::new(5, 5).unwrap();
        let start = Point::new(1, 1);
        let end = Point::new(3, 3);
        grid.set_start(start).unwrap();
        grid.set_end(end).unwrap();
        for p in [start, end] {
            for active in [true, false] {
                assert_eq!(
                    grid.set_obstacle(p, active),
                    Err(GridError::ProtectedCell { x: p.x, y: p.y })
                );
            }
            assert!(!grid.is_obstacle(&p));
            assert!(!grid.obstacles().contains(&p));
        }
    }

    #[test]
    fn new_start_replaces_old_and_clears_obstacle() {
        let mut grid = Grid::new(10, 10).unwrap();
        let old_start = Point::new(0, 0);
        let new_start = Point::new(4, 4);
        grid.set_start(old_start).unwrap();
        grid.set_obstacle(new_start, true).unwrap();
        grid.set_start(new_start).unwrap();
        assert!(!grid.cell(&old_start).unwrap().is_start);
        assert_eq!(
            grid.cell(&new_start).unwrap(),
            CellState {
                is_obstacle: false,
                is_start: true,
                is_end: false
            }
        );
        assert!(!grid.obstacles().contains(&new_start));
        // The previous start cell is editable again.
        assert!(grid.set_obstacle(old_start, true).unwrap());
    }

    #[test]
    fn clear_obstacles_keeps_endpoints() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_obstacle(Point::new(1, 1), true).unwrap();
        grid.set_obstacle(Point::new(2, 1), true).unwrap();
        grid.clear_obstacles();
        assert_eq!(grid.obstacle_count(), 0);
        assert!(grid.cells().all(|(_, c)| !c.is_obstacle));
        assert_eq!(grid.endpoints().start(), Some(Point::new(0, 0)));
    }

    #[test]
    fn random_placement_stays_in_bounds() {
        let mut grid = Grid::new(7, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let p = grid.random_start(&mut rng).unwrap();
            assert!(grid.in_bounds(&p));
            assert!(grid.is_start(&p));
            let q = grid.random_end(&mut rng).unwrap();
            assert!(grid.in_bounds(&q));
            assert!(grid.is_end(&q));
        }
    }

    #[test]
    fn random_placement_reports_the_placed_cell() {
        // A single cell forces every draw onto the obstacle and then onto the other endpoint.
        let mut grid = Grid::new(1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        grid.set_obstacle(Point::new(0, 0), true).unwrap();
        assert_eq!(grid.random_start(&mut rng), Ok(Point::new(0, 0)));
        assert_eq!(grid.obstacle_count(), 0);
        assert_eq!(grid.random_end(&mut rng), Ok(Point::new(0, 0)));
        assert_eq!(grid.current(), (None, Some(Point::new(0, 0))));
        assert!(!grid.is_obstacle(&Point::new(0, 0)));
    }

    #[test]
    fn display_marks_cells() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_end(Point::new(2, 1)).unwrap();
        grid.set_obstacle(Point::new(1, 0), true).unwrap();
        assert_eq!(format!("{}", grid), "S#.\n..E\n");
        assert_eq!(grid.cells().count(), 6);
        assert_eq!(grid.cells().nth(1).unwrap().0, Point::new(1, 0));
    }
}
