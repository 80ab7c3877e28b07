use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{Frontier, HeapFrontier, PathFinder, ScanFrontier};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_SCENARIOS: usize = 32;

/// Random obstacle layout with a fixed set of start/target pairs between free cells.
fn random_setup<F: Frontier<i32>>(
    rng: &mut StdRng,
) -> (PathFinder<i32, F>, Vec<(usize, usize)>) {
    let mut path_finder: PathFinder<i32, F> = PathFinder::with_frontier(N, N, 10).unwrap();
    for ix in 0..N * N {
        path_finder.set_obstacle(ix, rng.gen_bool(0.25)).unwrap();
    }
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = rng.gen_range(0..N * N);
        let end = rng.gen_range(0..N * N);
        if path_finder.reachable(start, end).unwrap()
            && !path_finder.is_obstacle(start).unwrap()
            && !path_finder.is_obstacle(end).unwrap()
        {
            scenarios.push((start, end));
        }
    }
    (path_finder, scenarios)
}

fn bench_frontier<F: Frontier<i32>>(c: &mut Criterion, name: &str) {
    let mut rng = StdRng::seed_from_u64(0);
    let (mut path_finder, scenarios) = random_setup::<F>(&mut rng);
    c.bench_function(format!("{N}x{N} random, {name}").as_str(), |b| {
        b.iter(|| {
            for (start, end) in &scenarios {
                black_box(path_finder.execute(*start, *end).unwrap());
            }
        })
    });
}

fn frontier_bench(c: &mut Criterion) {
    bench_frontier::<HeapFrontier<i32>>(c, "binary heap");
    bench_frontier::<ScanFrontier>(c, "linear scan");
}

criterion_group!(benches, frontier_bench);
criterion_main!(benches);
