use grid_seeker::{GridConfig, Pathfinder, PathSlot, SceneSource, Strategy, WorldPoint};

/// A target circling the grid while the seeker stays put.
struct Orbit {
    tick: u32,
}

impl SceneSource for Orbit {
    fn start_position(&self) -> WorldPoint {
        WorldPoint::new(-12.0, 0.0, -12.0)
    }
    fn target_position(&self) -> WorldPoint {
        let angle = self.tick as f32 * 0.7;
        WorldPoint::new(10.0 * angle.cos(), 0.0, 10.0 * angle.sin())
    }
}

// Replans every strategy on each tick against a grid with a round pillar in the
// middle, then reads the published paths back from the grid.
fn main() {
    env_logger::init();
    let sampler = |p: WorldPoint, radius: f32| (p.x * p.x + p.z * p.z).sqrt() < 4.0 + radius;
    let mut pathfinder =
        Pathfinder::from_config(GridConfig::default(), &sampler).expect("valid grid configuration");
    println!("{}", pathfinder.grid);
    let mut scene = Orbit { tick: 0 };
    for tick in 0..5 {
        scene.tick = tick;
        pathfinder.update(&scene);
        println!("tick {tick}, target at {}", scene.target_position());
        for strategy in Strategy::ALL {
            match pathfinder.grid.slot(strategy) {
                PathSlot::Found(path) => {
                    let positions = pathfinder.grid.path_positions(path);
                    let last = positions.last().copied().unwrap_or(scene.start_position());
                    println!("  {strategy}: {} steps, ending at {last}", path.len());
                }
                PathSlot::NoPath => println!("  {strategy}: no path"),
                PathSlot::Pending => println!("  {strategy}: not searched"),
            }
        }
    }
}
