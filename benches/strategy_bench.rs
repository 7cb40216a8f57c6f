use criterion::{criterion_group, criterion_main, Criterion};
use grid_seeker::{find_path, Extent, Grid, Strategy, WorldPoint};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;

/// An N x N grid with a fixed pseudo-random scattering of obstacles, start and target
/// cells kept open.
fn random_grid(density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(0);
    let mut blocked = (0..N * N).map(|_| rng.gen_bool(density)).collect::<Vec<bool>>();
    blocked[0] = false;
    blocked[N * N - 1] = false;
    let half = N as f32 / 2.0;
    Grid::new(
        Extent::new(N as f32, N as f32),
        0.5,
        WorldPoint::default(),
        &|p: WorldPoint, _: f32| blocked[(p.x + half) as usize * N + (p.z + half) as usize],
    )
    .unwrap()
}

fn corner_to_corner(c: &mut Criterion) {
    let half = N as f32 / 2.0 - 0.5;
    let start = WorldPoint::new(-half, 0.0, -half);
    let target = WorldPoint::new(half, 0.0, half);
    for density in [0.0, 0.2] {
        let grid = random_grid(density);
        for strategy in Strategy::ALL {
            c.bench_function(
                format!("{N}x{N}, {:.0}% blocked, {strategy}", density * 100.0).as_str(),
                |b| b.iter(|| black_box(find_path(&grid, strategy, start, target))),
            );
        }
    }
}

criterion_group!(benches, corner_to_corner);
criterion_main!(benches);
