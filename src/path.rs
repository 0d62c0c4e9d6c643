use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;

use crate::astar::FxIndexMap;
use crate::pathfinder::manhattan;

/// Walks the parent indices of the search arena from `terminal` back to the root and returns
/// the visited keys in root-to-terminal order.
pub(crate) fn reconstruct<N, V, F>(nodes: &FxIndexMap<N, V>, mut parent: F, terminal: usize) -> Vec<N>
where
    N: Clone,
    F: FnMut(&V) -> usize,
{
    let mut path = Vec::new();
    let mut cursor = terminal;
    while let Some((node, value)) = nodes.get_index(cursor) {
        path.push(node.clone());
        cursor = parent(value);
    }
    path.reverse();
    path
}

/// Ordered cells from start to end, both included. An empty result means the end cannot be
/// reached from the start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathResult {
    points: Vec<Point>,
}

impl PathResult {
    pub fn empty() -> PathResult {
        PathResult::default()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }
    /// Checks that every consecutive pair of cells shares an edge.
    pub fn is_contiguous(&self) -> bool {
        self.points
            .iter()
            .tuple_windows()
            .all(|(a, b)| manhattan(a, b) == 1)
    }
}

impl From<Vec<Point>> for PathResult {
    fn from(points: Vec<Point>) -> PathResult {
        PathResult { points }
    }
}

impl<'a> IntoIterator for &'a PathResult {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.points.is_empty() {
            return write!(f, "<no path>");
        }
        write!(
            f,
            "{}",
            self.points
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .join(" -> ")
        )
    }
}
