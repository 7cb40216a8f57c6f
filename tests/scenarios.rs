use grid_seeker::{
    find_path, path_cost, Extent, Grid, GridConfig, GridError, PathSlot, Pathfinder, Point,
    Strategy, WorldPoint,
};

/// A 5x5 grid of unit cells centred on the origin, with the given cells blocked.
fn five_by_five(blocked: &[(i32, i32)]) -> Grid {
    Grid::new(
        Extent::new(5.0, 5.0),
        0.5,
        WorldPoint::default(),
        &|p: WorldPoint, _: f32| {
            let coord = ((p.x + 2.5) as i32, (p.z + 2.5) as i32);
            blocked.contains(&coord)
        },
    )
    .unwrap()
}

/// World-space centre of a cell of [five_by_five].
fn centre(x: i32, y: i32) -> WorldPoint {
    WorldPoint::new(x as f32 - 2.0, 0.0, y as f32 - 2.0)
}

#[test]
fn open_grid_diagonal() {
    let grid = five_by_five(&[]);
    for strategy in [Strategy::AstarEuclidean, Strategy::AstarManhattan] {
        let result = find_path(&grid, strategy, centre(0, 0), centre(4, 4));
        assert_eq!(result.path.as_ref().map(Vec::len), Some(4), "{strategy}");
        assert_eq!(result.cost, Some(4 * 14), "{strategy}");
    }
}

#[test]
fn open_grid_every_strategy_reaches_target() {
    let grid = five_by_five(&[]);
    for strategy in Strategy::ALL {
        let result = find_path(&grid, strategy, centre(0, 0), centre(4, 4));
        let path = result.path.unwrap();
        assert_eq!(path.last(), Some(&Point::new(4, 4)));
        assert!(!path.contains(&Point::new(0, 0)));
        if strategy.optimal() {
            assert_eq!(path_cost(&Point::new(0, 0), &path), 56);
        }
    }
}

#[test]
fn column_wall_forces_detour() {
    let grid = five_by_five(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
    for strategy in Strategy::ALL {
        let path = find_path(&grid, strategy, centre(0, 0), centre(4, 4))
            .into_path()
            .unwrap();
        assert!(path.contains(&Point::new(2, 4)), "{strategy}: {path:?}");
    }
}

#[test]
fn start_equals_target() {
    let grid = five_by_five(&[]);
    for strategy in Strategy::ALL {
        let result = find_path(&grid, strategy, centre(3, 1), centre(3, 1));
        assert_eq!(result.path, Some(vec![]));
    }
}

#[test]
fn enclosed_target_has_no_path() {
    let ring = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)];
    let mut pathfinder = Pathfinder::new(five_by_five(&ring));
    let results = pathfinder.update(&(centre(0, 0), centre(2, 2)));
    for (strategy, result) in results {
        assert!(!result.is_success(), "{strategy}");
        assert_eq!(pathfinder.grid.slot(strategy), &PathSlot::NoPath);
    }
}

#[test]
fn out_of_range_points_clamp_to_edge() {
    let grid = five_by_five(&[]);
    let result = find_path(
        &grid,
        Strategy::BreadthFirst,
        WorldPoint::new(-40.0, 0.0, -40.0),
        WorldPoint::new(40.0, 3.0, -40.0),
    );
    let path = result.path.unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.last(), Some(&Point::new(4, 0)));
}

#[test]
fn searches_share_grid_across_threads() {
    let grid = five_by_five(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
    let sequential = Strategy::ALL
        .iter()
        .map(|&strategy| find_path(&grid, strategy, centre(0, 0), centre(4, 0)))
        .collect::<Vec<_>>();
    let concurrent = std::thread::scope(|s| {
        let handles = Strategy::ALL
            .iter()
            .map(|&strategy| {
                let grid = &grid;
                s.spawn(move || find_path(grid, strategy, centre(0, 0), centre(4, 0)))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(sequential, concurrent);
}

#[test]
fn repeated_searches_do_not_leak_state() {
    let mut pathfinder =
        Pathfinder::with_strategies(five_by_five(&[]), vec![Strategy::AstarManhattan]);
    let first = pathfinder.update(&(centre(0, 0), centre(4, 4)));
    pathfinder.update(&(centre(4, 0), centre(0, 4)));
    let again = pathfinder.update(&(centre(0, 0), centre(4, 4)));
    assert_eq!(first, again);
}

#[test]
fn bad_config_fails_construction() {
    let config = GridConfig {
        node_radius: -0.5,
        ..GridConfig::default()
    };
    let result = Pathfinder::from_config(config, &|_: WorldPoint, _: f32| false);
    assert!(matches!(result, Err(GridError::InvalidRadius(_))));
}
