//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! with a fixed tie-breaking rule: among frontier nodes of equal estimated cost, the one that
//! entered the frontier first is expanded first. This keeps results reproducible.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::path::reconstruct;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the root node.
pub(crate) const ROOT: usize = usize::MAX;

/// Arena entry of a node. The coordinate is the arena key and the parent is the arena index of
/// the predecessor, so links can never dangle or outlive the search.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode<C> {
    pub parent: usize,
    pub g: C,
    pub h: C,
    pub closed: bool,
}

impl<C: Zero + Copy> SearchNode<C> {
    pub fn f(&self) -> C {
        self.g + self.h
    }
}

/// Counters describing one search invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from open to closed.
    pub expanded: usize,
    /// Distinct nodes ever inserted into open, the start included.
    pub generated: usize,
    /// Set when the expansion budget ran out before the goal was reached.
    pub aborted: bool,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders per estimated cost, then by arena index. Arena indices are handed out when a
        // node first enters open, so lower indices are older entries.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Runs A* from `start` until `success` accepts a node. Returns the path from `start` to that
/// node with its cost, or [None] if the frontier runs dry or more than `max_expansions` nodes
/// would have to be expanded.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> (Option<(Vec<N>, C)>, SearchStats)
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut stats = SearchStats::default();
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    let h = heuristic(start);
    nodes.insert(
        start.clone(),
        SearchNode {
            parent: ROOT,
            g: Zero::zero(),
            h,
            closed: false,
        },
    );
    stats.generated = 1;
    let mut open = BinaryHeap::new();
    open.push(SmallestCostHolder {
        estimated_cost: h,
        cost: Zero::zero(),
        index: 0,
    });
    while let Some(SmallestCostHolder { cost, index, .. }) = open.pop() {
        // A node is pushed again whenever a cheaper way to it is found, so older heap entries
        // are skipped.
        let node = match nodes.get_index(index) {
            Some((node, entry)) if !entry.closed && cost <= entry.g => node.clone(),
            _ => continue,
        };
        if success(&node) {
            let path = reconstruct(&nodes, |entry| entry.parent, index);
            return (Some((path, cost)), stats);
        }
        if max_expansions.is_some_and(|limit| stats.expanded >= limit) {
            warn!(
                "Search aborted after {} expansions without reaching the goal",
                stats.expanded
            );
            stats.aborted = true;
            return (None, stats);
        }
        if let Some((_, entry)) = nodes.get_index_mut(index) {
            entry.closed = true;
        }
        stats.expanded += 1;

        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                    stats.generated += 1;
                }
                Occupied(mut e) => {
                    let entry = e.get_mut();
                    if entry.closed || new_cost + entry.h >= entry.f() {
                        continue;
                    }
                    entry.g = new_cost;
                    entry.parent = index;
                    h = entry.h;
                    n = e.index();
                }
            }

            open.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    (None, stats)
}
