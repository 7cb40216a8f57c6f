use log::debug;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::{Grid, PathSlot};
use crate::search::{find_path, SearchResult, Strategy};
use crate::world::{SceneSource, WorldPoint, WorldSampler};

/// A seeking session: owns the [Grid] and re-plans every enabled strategy from scratch
/// whenever [update](Self::update) is called with the current scene.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    pub grid: Grid,
    strategies: Vec<Strategy>,
}

impl Pathfinder {
    /// Creates a session running every strategy in [Strategy::ALL].
    pub fn new(grid: Grid) -> Pathfinder {
        Pathfinder::with_strategies(grid, Strategy::ALL.to_vec())
    }

    pub fn with_strategies(grid: Grid, mut strategies: Vec<Strategy>) -> Pathfinder {
        strategies.sort();
        strategies.dedup();
        Pathfinder { grid, strategies }
    }

    pub fn from_config<S>(config: GridConfig, sampler: &S) -> Result<Pathfinder, GridError>
    where
        S: WorldSampler + ?Sized,
    {
        Ok(Pathfinder::new(Grid::build(config, sampler)?))
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Reads the start and target from `scene` once, runs every enabled strategy and
    /// publishes the outcomes into the grid.
    pub fn update<S>(&mut self, scene: &S) -> Vec<(Strategy, SearchResult)>
    where
        S: SceneSource + ?Sized,
    {
        let start = scene.start_position();
        let target = scene.target_position();
        debug!("Planning from {} to {}", start, target);
        let results = self
            .strategies
            .iter()
            .map(|&strategy| (strategy, find_path(&self.grid, strategy, start, target)))
            .collect::<Vec<_>>();
        for (strategy, result) in &results {
            self.grid.publish(*strategy, result);
        }
        results
    }

    /// Runs a single strategy between two world points and publishes its outcome.
    pub fn search(
        &mut self,
        strategy: Strategy,
        start: WorldPoint,
        target: WorldPoint,
    ) -> &PathSlot {
        let result = find_path(&self.grid, strategy, start, target);
        self.grid.publish(strategy, &result);
        self.grid.slot(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Extent;
    use grid_util::point::Point;

    fn session(strategies: Vec<Strategy>) -> Pathfinder {
        let grid = Grid::new(
            Extent::new(5.0, 5.0),
            0.5,
            WorldPoint::default(),
            // Blocks x = 2 except for its top cell
            &|p: WorldPoint, _: f32| p.x.abs() < 0.5 && p.z < 1.5,
        )
        .unwrap();
        Pathfinder::with_strategies(grid, strategies)
    }

    #[test]
    fn update_publishes_every_strategy() {
        let mut pathfinder = session(Strategy::ALL.to_vec());
        let scene = (WorldPoint::new(-2.0, 0.0, -2.0), WorldPoint::new(2.0, 0.0, -2.0));
        let results = pathfinder.update(&scene);
        assert_eq!(results.len(), Strategy::COUNT);
        for strategy in Strategy::ALL {
            let path = pathfinder.grid.last_path(strategy).unwrap();
            assert!(path.contains(&Point::new(2, 4)));
            assert_eq!(path.last(), Some(&Point::new(4, 0)));
        }
    }

    #[test]
    fn only_enabled_strategies_run() {
        let mut pathfinder = session(vec![
            Strategy::DepthFirst,
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
        ]);
        assert_eq!(
            pathfinder.strategies(),
            &[Strategy::BreadthFirst, Strategy::DepthFirst]
        );
        let scene = (WorldPoint::new(-2.0, 0.0, 0.0), WorldPoint::new(-2.0, 0.0, 2.0));
        pathfinder.update(&scene);
        assert!(pathfinder.grid.last_path(Strategy::BreadthFirst).is_some());
        assert_eq!(pathfinder.grid.slot(Strategy::AstarEuclidean), &PathSlot::Pending);
    }

    #[test]
    fn failed_search_clears_previous_path() {
        let mut pathfinder = session(vec![Strategy::AstarEuclidean]);
        let start = WorldPoint::new(-2.0, 0.0, -2.0);
        let target = WorldPoint::new(2.0, 0.0, 2.0);
        let slot = pathfinder.search(Strategy::AstarEuclidean, start, target);
        assert!(matches!(slot, PathSlot::Found(_)));
        // The blocked column cannot be a target
        let target = WorldPoint::new(0.0, 0.0, -2.0);
        let slot = pathfinder.search(Strategy::AstarEuclidean, start, target);
        assert_eq!(slot, &PathSlot::NoPath);
    }
}
