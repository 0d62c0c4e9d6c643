use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Index of the blocked cells of a [Grid](crate::grid::Grid). Only the owning grid mutates it,
/// so it can never drift from the dense obstacle flags. Iteration follows the order in which
/// cells were blocked.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    cells: FxIndexSet<Point>,
}

impl ObstacleSet {
    pub fn new() -> ObstacleSet {
        ObstacleSet::default()
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.cells.contains(point)
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.cells.iter()
    }
    pub(crate) fn insert(&mut self, point: Point) -> bool {
        self.cells.insert(point)
    }
    /// Removal keeps the remaining cells in blocking order.
    pub(crate) fn remove(&mut self, point: &Point) -> bool {
        self.cells.shift_remove(point)
    }
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Point> + '_ {
        self.cells.drain(..)
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Point;
    type IntoIter = indexmap::set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
