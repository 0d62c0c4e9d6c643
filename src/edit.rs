use grid_util::point::Point;
use itertools::iproduct;
use log::trace;

use crate::endpoints::Endpoint;
use crate::error::{GridError, Result};
use crate::grid::Grid;

/// What a [Brush] stroke does to the cells it covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Marks covered cells as obstacles.
    #[default]
    Create,
    /// Clears obstacles from covered cells.
    Destroy,
    /// Moves the start marker to the stroke centre.
    StartPoint,
    /// Moves the end marker to the stroke centre.
    EndPoint,
}

/// Radius-based batch editor driven by pointer input. It only goes through the single-cell
/// entry points of [Grid]; start and end cells under an obstacle stroke are skipped silently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub mode: EditMode,
    /// Euclidean radius in cells. The default of 0.5 covers just the centre cell.
    pub radius: f32,
}

impl Default for Brush {
    fn default() -> Brush {
        Brush {
            mode: EditMode::Create,
            radius: 0.5,
        }
    }
}

impl Brush {
    pub fn new(mode: EditMode, radius: f32) -> Brush {
        Brush { mode, radius }
    }

    /// In-bounds cells within `radius` of `center`, row by row. Only the part of the
    /// bounding square that overlaps the grid is scanned, and the reach is capped at
    /// `cols + rows`, which spans the whole grid from any centre on it.
    pub fn covered_cells(&self, grid: &Grid, center: Point) -> Vec<Point> {
        let limit = (grid.cols() + grid.rows()) as f32;
        let reach = self.radius.max(0.0).min(limit).floor() as i32;
        let x0 = center.x.saturating_sub(reach).max(0);
        let x1 = center.x.saturating_add(reach).min(grid.cols() as i32 - 1);
        let y0 = center.y.saturating_sub(reach).max(0);
        let y1 = center.y.saturating_add(reach).min(grid.rows() as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return Vec::new();
        }
        iproduct!(y0..=y1, x0..=x1)
            .map(|(y, x)| Point::new(x, y))
            .filter(|p| p.euclidean_distance(&center) <= self.radius)
            .collect()
    }

    /// Applies one stroke and returns the number of cells whose state changed. Endpoint modes
    /// fail with [GridError::OutOfBounds] when `center` lies outside the grid.
    pub fn apply(&self, grid: &mut Grid, center: Point) -> Result<usize> {
        let create = match self.mode {
            EditMode::Create => true,
            EditMode::Destroy => false,
            EditMode::StartPoint => return grid.place(Endpoint::Start, center).map(|_| 1),
            EditMode::EndPoint => return grid.place(Endpoint::End, center).map(|_| 1),
        };
        let mut changed = 0;
        for p in self.covered_cells(grid, center) {
            match grid.set_obstacle(p, create) {
                Ok(true) => changed += 1,
                Ok(false) => {}
                Err(GridError::ProtectedCell { .. }) => trace!("Brush skipped endpoint {:?}", p),
                Err(e) => return Err(e),
            }
        }
        Ok(changed)
    }
}
