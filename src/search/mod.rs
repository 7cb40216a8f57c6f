//! The search engine. Every [Strategy] runs through the same expansion loop in
//! [find_path_between]; strategies only differ in their frontier ordering, cost rule
//! and heuristic.
use core::fmt;
use std::iter;

use grid_util::point::Point;
use itertools::Itertools;
use log::debug;

use crate::grid::Grid;
use crate::octile_distance;
use crate::world::WorldPoint;

pub mod context;
pub mod frontier;
pub mod strategy;

use context::SearchContext;
use frontier::Frontier;
pub use strategy::{CostRule, FrontierKind, Heuristic, Strategy};

/// Outcome of a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The cells from start to target, excluding the start and including the target.
    /// `None` if the target could not be reached.
    pub path: Option<Vec<Point>>,
    /// Octile cost of the path, regardless of the cost rule the strategy searched with.
    pub cost: Option<i32>,
    /// Number of cells removed from the frontier and expanded.
    pub expanded: usize,
}

impl SearchResult {
    pub fn success(start: &Point, path: Vec<Point>, expanded: usize) -> SearchResult {
        let cost = path_cost(start, &path);
        SearchResult {
            path: Some(path),
            cost: Some(cost),
            expanded,
        }
    }

    pub fn failure(expanded: usize) -> SearchResult {
        SearchResult {
            path: None,
            cost: None,
            expanded,
        }
    }

    pub fn is_success(&self) -> bool {
        self.path.is_some()
    }

    pub fn into_path(self) -> Option<Vec<Point>> {
        self.path
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.path, self.cost) {
            (Some(path), Some(cost)) => write!(
                f,
                "path of {} steps, cost {}, {} cells expanded",
                path.len(),
                cost,
                self.expanded
            ),
            _ => write!(f, "no path, {} cells expanded", self.expanded),
        }
    }
}

/// Sums the octile cost of following `path` from `start`.
pub fn path_cost(start: &Point, path: &[Point]) -> i32 {
    iter::once(start)
        .chain(path)
        .tuple_windows()
        .map(|(p1, p2)| octile_distance(p1, p2))
        .sum()
}

/// Resolves two world points to cells of `grid` and searches between them.
pub fn find_path(
    grid: &Grid,
    strategy: Strategy,
    start: WorldPoint,
    target: WorldPoint,
) -> SearchResult {
    let start_cell = grid.cell_from_world_point(start);
    let target_cell = grid.cell_from_world_point(target);
    find_path_between(grid, strategy, start_cell.coord, target_cell.coord)
}

/// Searches from `start` to `target` using `strategy`. An unreachable target is a
/// normal outcome, reported by a [SearchResult] without path.
pub fn find_path_between(
    grid: &Grid,
    strategy: Strategy,
    start: Point,
    target: Point,
) -> SearchResult {
    if !grid.in_bounds(&start) || !grid.in_bounds(&target) {
        debug!("{}: {} or {} lies outside the grid", strategy, start, target);
        return SearchResult::failure(0);
    }
    // Check if the target can be reached at all before flood-filling the grid.
    if !grid.reachable(&start, &target) {
        debug!("{}: {} is not reachable from {}", strategy, target, start);
        return SearchResult::failure(0);
    }

    let cost_rule = strategy.cost_rule();
    let heuristic = strategy.heuristic();
    let mut ct = SearchContext::new();
    let mut frontier = Frontier::new(strategy.frontier());
    ct.open(start, None, 0, heuristic.estimate(&start, &target));
    frontier.push(start);
    let mut expanded = 0;

    while let Some(current) = frontier.pop(&ct) {
        if !ct.mark_visited(current) {
            continue;
        }
        expanded += 1;
        if current == target {
            return match ct.reconstruct(start, target, grid.cell_count()) {
                Some(path) => {
                    debug!(
                        "{}: reached {} from {} after expanding {} cells",
                        strategy, target, start, expanded
                    );
                    SearchResult::success(&start, path, expanded)
                }
                None => SearchResult::failure(expanded),
            };
        }
        let current_cost = ct.get(&current).map_or(0, |node| node.g_cost);
        for neighbour in grid.neighborhood_points(&current) {
            if !grid.is_walkable(&neighbour) || ct.is_visited(&neighbour) {
                continue;
            }
            if cost_rule == CostRule::Untracked {
                // Admission by membership only: each cell enters the frontier once
                if !ct.contains(&neighbour) {
                    ct.open(neighbour, Some(current), 0, 0);
                    frontier.push(neighbour);
                }
                continue;
            }
            let new_cost = current_cost + cost_rule.step_cost(&current, &neighbour);
            match ct.get_mut(&neighbour) {
                Some(node) => {
                    if new_cost < node.g_cost {
                        node.g_cost = new_cost;
                        node.parent = Some(current);
                    }
                }
                None => {
                    let h = heuristic.estimate(&neighbour, &target);
                    ct.open(neighbour, Some(current), new_cost, h);
                    frontier.push(neighbour);
                }
            }
        }
    }
    debug!(
        "{}: frontier exhausted after expanding {} cells, no path from {} to {}",
        strategy, expanded, start, target
    );
    SearchResult::failure(expanded)
}
