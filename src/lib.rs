//! # grid_seeker
//!
//! A grid-based path search engine. A [Grid] is sampled once from a
//! [WorldSampler] that reports which world-space points are obstructed, after which
//! paths between world points can be computed with any of the strategies in [Strategy]:
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan or
//! Euclidean heuristic, uniform-cost search, Dijkstra, breadth-first and depth-first
//! search. All strategies share one expansion loop and differ only in how the frontier
//! is ordered and how costs accumulate.
//!
//! Searches only borrow the grid immutably and keep their bookkeeping in a per-search
//! map, so several searches may run over the same [Grid] at once. Results are published
//! back into per-strategy slots on the grid for consumption by a visualization layer.
//!
//! Movement costs use integer octile weights: [C] for a straight step and [D] for a
//! diagonal one. Diagonal steps may cut corners between two blocked cells.
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod search;
pub mod world;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use grid::{Grid, PathSlot};
pub use pathfinder::Pathfinder;
pub use search::{find_path, find_path_between, path_cost, SearchResult, Strategy};
pub use world::{Extent, SceneSource, WorldPoint, WorldSampler};

pub use grid_util::point::Point;

/// Cost of a straight (cardinal) step.
pub const C: i32 = 10;
/// Cost of a diagonal step, approximately `C * sqrt(2)`.
pub const D: i32 = 14;
/// Helper constant for the octile distance formula.
pub const E: i32 = 2 * C - D;

/// Inline capacity of neighbourhood buffers, which never hold more than 8 cells.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Octile distance between two points, taking the maximal amount of diagonal steps
/// before going straight.
pub fn octile_distance(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    // Formula from https://github.com/riscy/a_star_on_grids
    (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2
}
