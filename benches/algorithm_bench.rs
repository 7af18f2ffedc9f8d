//! Benchmarks for the TSP solvers.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsp_heuristics::problem::random_demands;
use tsp_heuristics::{CapacityTsp, DistanceMatrix, GenericTsp};

/// Create a seeded benchmark matrix of the given size.
fn create_benchmark_matrix(size: usize) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    DistanceMatrix::random(size, &mut rng).unwrap()
}

#[cfg(feature = "bench")]
fn benchmark_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");

    for size in [50, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let solver = GenericTsp::new(create_benchmark_matrix(size));

            b.iter(|| solver.nearest_neighbor());
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt");

    for size in [20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let solver = GenericTsp::new(create_benchmark_matrix(size));

            b.iter(|| solver.two_opt());
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity");

    for size in [50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let matrix = create_benchmark_matrix(size);
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let demands = random_demands(size, &mut rng);
            let solver = CapacityTsp::new(matrix, demands, 100).unwrap();

            b.iter(|| {
                let mut search_rng = ChaCha8Rng::seed_from_u64(11);
                solver.local_search(&mut search_rng)
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_nearest_neighbor,
    benchmark_two_opt,
    benchmark_capacity
);

#[cfg(feature = "bench")]
criterion_main!(benches);
