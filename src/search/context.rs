//! Per-search bookkeeping. Costs and back-pointers are keyed by cell coordinate and
//! live only as long as one search, so cells stay immutable and no state leaks from
//! one run into the next.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::warn;

use grid_util::point::Point;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// In the frontier, waiting to be expanded.
    Open,
    /// Expanded; never reconsidered.
    Visited,
}

/// Scratch record of a cell touched by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub g_cost: i32,
    pub h_cost: i32,
    pub parent: Option<Point>,
    pub state: NodeState,
}

impl SearchNode {
    pub fn f_cost(&self) -> i32 {
        self.g_cost + self.h_cost
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    nodes: FxIndexMap<Point, SearchNode>,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    /// Records a cell as entering the frontier.
    pub fn open(&mut self, point: Point, parent: Option<Point>, g_cost: i32, h_cost: i32) {
        self.nodes.insert(
            point,
            SearchNode {
                g_cost,
                h_cost,
                parent,
                state: NodeState::Open,
            },
        );
    }

    /// Marks an open cell as visited. Returns false if the cell was already visited
    /// or was never opened.
    pub fn mark_visited(&mut self, point: Point) -> bool {
        match self.nodes.get_mut(&point) {
            Some(node) if node.state == NodeState::Open => {
                node.state = NodeState::Visited;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, point: &Point) -> Option<&SearchNode> {
        self.nodes.get(point)
    }

    pub fn get_mut(&mut self, point: &Point) -> Option<&mut SearchNode> {
        self.nodes.get_mut(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.nodes.contains_key(point)
    }

    pub fn is_visited(&self, point: &Point) -> bool {
        self.nodes
            .get(point)
            .is_some_and(|node| node.state == NodeState::Visited)
    }

    /// Walks back-pointers from `target` to `start` and returns the cells in between in
    /// start-to-target order, excluding `start` and including `target`. Gives up after
    /// `bound` steps or on a missing back-pointer.
    pub fn reconstruct(&self, start: Point, target: Point, bound: usize) -> Option<Vec<Point>> {
        let mut path = Vec::new();
        let mut current = target;
        while current != start {
            if path.len() >= bound {
                warn!(
                    "Parent chain from {} exceeded {} steps without reaching {}",
                    target, bound, start
                );
                return None;
            }
            path.push(current);
            match self.nodes.get(&current).and_then(|node| node.parent) {
                Some(parent) => current = parent,
                None => {
                    warn!("Parent chain from {} broke off at {}", target, current);
                    return None;
                }
            }
        }
        path.reverse();
        Some(path)
    }
}
