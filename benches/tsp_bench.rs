//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Uses the bundled reference instances to measure generation throughput,
//! the crossover operator and a small multi-world run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use tsp_ga::ga::operators::ordered_crossover;
use tsp_ga::{instances, GaConfig, TspGa, WorldRunner};

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_djibouti");
    group.sample_size(10);

    let problem = Arc::new(instances::djibouti());
    for &pop in &[50usize, 100, 500] {
        let config = GaConfig::default().with_population_size(pop);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, config| {
            let mut ga = TspGa::new(problem.clone(), config, 42).expect("valid setup");
            ga.create_initial_population(config.population_size)
                .expect("valid population");
            b.iter(|| {
                let (_, score) = ga.evolve().expect("population exists");
                black_box(score)
            })
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_crossover");

    for &n in &[38usize, 200, 1000] {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..n).collect();
        let mut p2 = p1.clone();
        p2.shuffle(&mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(ordered_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
    }
    group.finish();
}

fn bench_worlds(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_runner_lettered");
    group.sample_size(10);

    let problem = Arc::new(instances::lettered());
    let config = GaConfig::default()
        .with_population_size(100)
        .with_max_generations(100)
        .with_worlds(8)
        .with_seed(42);
    group.bench_function("w8_p100_g100", |b| {
        b.iter(|| {
            let result = WorldRunner::run(problem.clone(), black_box(&config)).expect("valid run");
            black_box(result.best_score)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_evolve, bench_crossover, bench_worlds);
criterion_main!(benches);
