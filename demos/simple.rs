use grid_seeker::{find_path, Extent, Grid, Strategy, WorldPoint};

// In this example a path is found on an open 5x5 grid of unit cells from the
// bottom-left corner to the top-right one, once per strategy.
fn main() {
    env_logger::init();
    let grid = Grid::new(
        Extent::new(5.0, 5.0),
        0.5,
        WorldPoint::default(),
        &|_: WorldPoint, _: f32| false,
    )
    .expect("valid grid configuration");
    println!("{}", grid);
    let start = WorldPoint::new(-2.0, 0.0, -2.0);
    let end = WorldPoint::new(2.0, 0.0, 2.0);
    for strategy in Strategy::ALL {
        let result = find_path(&grid, strategy, start, end);
        println!("{strategy}: {result}");
        if let Some(path) = result.path {
            for p in path {
                println!("  {:?}", p);
            }
        }
    }
}
