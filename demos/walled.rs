use grid_seeker::{find_path, Extent, Grid, Point, Strategy, WorldPoint};

// A wall runs along x = 2 with a single gap at the top:
// .....
// ..#..
// ..#..
// ..#..
// S.#.E
// Every strategy has to pass through the gap at (2, 4).
fn main() {
    env_logger::init();
    let grid = Grid::new(
        Extent::new(5.0, 5.0),
        0.5,
        WorldPoint::default(),
        &|p: WorldPoint, _: f32| p.x.abs() < 0.5 && p.z < 1.5,
    )
    .expect("valid grid configuration");
    println!("{}", grid);
    let start = WorldPoint::new(-2.0, 0.0, -2.0);
    let end = WorldPoint::new(2.0, 0.0, -2.0);
    for strategy in Strategy::ALL {
        let result = find_path(&grid, strategy, start, end);
        let through_gap = result
            .path
            .as_ref()
            .is_some_and(|path| path.contains(&Point::new(2, 4)));
        println!("{strategy}: {result}; through gap: {through_gap}");
    }
}
