use core::fmt;

use grid_util::point::Point;

use crate::octile_distance;

/// The selectable search strategies. Each one is a row in a small rule table
/// ([Strategy::frontier], [Strategy::cost_rule], [Strategy::heuristic]) that the shared
/// expansion loop consults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// A* with octile edge costs and a Manhattan heuristic.
    AstarManhattan,
    /// A* with octile edge costs and a Euclidean heuristic.
    AstarEuclidean,
    /// Cost-ordered search in which every step is free, so that it expands cells in
    /// insertion order and yields a minimal hop-count path.
    UniformCost,
    /// Uniform-cost search with octile edge costs.
    Dijkstra,
    /// Breadth-first search, minimal hop count.
    BreadthFirst,
    /// Depth-first search, finds *a* path with no optimality guarantee.
    DepthFirst,
}

/// How the frontier is stored and which cell is removed next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontierKind {
    /// Unordered list; removes the cell with minimal f-cost, ties broken on h-cost and
    /// then insertion order.
    CostList,
    /// FIFO queue.
    Queue,
    /// LIFO stack.
    Stack,
}

/// How the accumulated cost of a neighbour is derived from its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostRule {
    /// `g = parent.g + octile(parent, neighbour)`.
    Octile,
    /// `g = parent.g`.
    Free,
    /// Costs are not tracked; admission depends on frontier membership alone.
    Untracked,
}

/// Remaining-cost estimate towards the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Zero,
    /// Unweighted `|dx| + |dy|`.
    Manhattan,
    /// Unweighted `floor(sqrt(dx² + dy²))`.
    Euclidean,
}

impl Heuristic {
    pub fn estimate(&self, p1: &Point, p2: &Point) -> i32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        match self {
            Heuristic::Zero => 0,
            Heuristic::Manhattan => delta_x + delta_y,
            Heuristic::Euclidean => {
                let (dx, dy) = (delta_x as f64, delta_y as f64);
                (dx * dx + dy * dy).sqrt().floor() as i32
            }
        }
    }
}

impl CostRule {
    /// Cost of stepping from `from` to its neighbour `to`.
    pub fn step_cost(&self, from: &Point, to: &Point) -> i32 {
        match self {
            CostRule::Octile => octile_distance(from, to),
            CostRule::Free | CostRule::Untracked => 0,
        }
    }
}

impl Strategy {
    pub const COUNT: usize = 6;
    pub const ALL: [Strategy; Strategy::COUNT] = [
        Strategy::AstarManhattan,
        Strategy::AstarEuclidean,
        Strategy::UniformCost,
        Strategy::Dijkstra,
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
    ];

    /// Position of the strategy in [Strategy::ALL].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn frontier(&self) -> FrontierKind {
        match self {
            Strategy::AstarManhattan
            | Strategy::AstarEuclidean
            | Strategy::UniformCost
            | Strategy::Dijkstra => FrontierKind::CostList,
            Strategy::BreadthFirst => FrontierKind::Queue,
            Strategy::DepthFirst => FrontierKind::Stack,
        }
    }

    pub fn cost_rule(&self) -> CostRule {
        match self {
            Strategy::AstarManhattan | Strategy::AstarEuclidean | Strategy::Dijkstra => {
                CostRule::Octile
            }
            Strategy::UniformCost => CostRule::Free,
            Strategy::BreadthFirst | Strategy::DepthFirst => CostRule::Untracked,
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        match self {
            Strategy::AstarManhattan => Heuristic::Manhattan,
            Strategy::AstarEuclidean => Heuristic::Euclidean,
            _ => Heuristic::Zero,
        }
    }

    /// Whether the strategy guarantees a path of minimal octile cost.
    pub fn optimal(&self) -> bool {
        self.cost_rule() == CostRule::Octile
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::AstarManhattan => "A* (Manhattan)",
            Strategy::AstarEuclidean => "A* (Euclidean)",
            Strategy::UniformCost => "uniform-cost",
            Strategy::Dijkstra => "Dijkstra",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_order() {
        for (ix, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), ix);
        }
    }

    #[test]
    fn heuristics() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert_eq!(Heuristic::Zero.estimate(&p1, &p2), 0);
        assert_eq!(Heuristic::Manhattan.estimate(&p1, &p2), 7);
        assert_eq!(Heuristic::Euclidean.estimate(&p1, &p2), 5);
        assert_eq!(Heuristic::Euclidean.estimate(&p1, &Point::new(1, 1)), 1);
        assert_eq!(Heuristic::Manhattan.estimate(&p2, &p1), 7);
    }

    #[test]
    fn rule_table() {
        assert_eq!(Strategy::BreadthFirst.frontier(), FrontierKind::Queue);
        assert_eq!(Strategy::DepthFirst.frontier(), FrontierKind::Stack);
        assert_eq!(Strategy::UniformCost.cost_rule(), CostRule::Free);
        assert_eq!(Strategy::UniformCost.heuristic(), Heuristic::Zero);
        assert!(Strategy::AstarEuclidean.optimal());
        assert!(Strategy::Dijkstra.optimal());
        assert!(!Strategy::UniformCost.optimal());
        assert!(!Strategy::DepthFirst.optimal());
    }

    #[test]
    fn step_costs() {
        let p = Point::new(2, 2);
        assert_eq!(CostRule::Octile.step_cost(&p, &Point::new(3, 3)), 14);
        assert_eq!(CostRule::Octile.step_cost(&p, &Point::new(2, 1)), 10);
        assert_eq!(CostRule::Free.step_cost(&p, &Point::new(3, 3)), 0);
    }
}
