//! End-to-end runs over the reference instances.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tsp_ga::{instances, GaConfig, TspGa, TspProblem, WorldRunner};

fn unit_square() -> Arc<TspProblem> {
    let mut problem = TspProblem::new(4);
    problem.add_city("a", 0.0, 0.0).unwrap();
    problem.add_city("b", 0.0, 1.0).unwrap();
    problem.add_city("c", 1.0, 1.0).unwrap();
    problem.add_city("d", 1.0, 0.0).unwrap();
    Arc::new(problem)
}

#[test]
fn test_square_converges_in_every_world() {
    let config = GaConfig::default()
        .with_population_size(10)
        .with_max_generations(50)
        .with_worlds(8)
        .with_seed(2024);
    let result = WorldRunner::run(unit_square(), &config).unwrap();
    for world in &result.worlds {
        assert!(
            (world.best_score - 4.0).abs() < 1e-9,
            "world {} ended at {}",
            world.world,
            world.best_score
        );
        assert!(world.best_score <= world.score_history[1]);
    }
    assert!((result.best_score - 4.0).abs() < 1e-9);
}

#[test]
fn test_djibouti_improves_on_initial_best() {
    let problem = Arc::new(instances::djibouti());
    let config = GaConfig::default()
        .with_population_size(100)
        .with_max_generations(1000)
        .with_worlds(4)
        .with_seed(38);
    let result = WorldRunner::run(problem, &config).unwrap();

    for world in &result.worlds {
        let initial = world.score_history[0];
        for pair in world.score_history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!(
            world.best_score < initial * 0.9,
            "world {} improved only from {} to {}",
            world.world,
            initial,
            world.best_score
        );
    }
    // Optimal tour length is 6656.
    assert!(result.best_score >= 6656.0 - 1.0);
}

#[test]
fn test_external_cancellation_stops_worlds() {
    let cancel = Arc::new(AtomicBool::new(false));
    let config = GaConfig::default()
        .with_population_size(200)
        .with_max_generations(100_000)
        .with_worlds(2)
        .with_max_threads(2)
        .with_seed(1);

    let flag = cancel.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        flag.store(true, Ordering::Relaxed);
    });

    let result =
        WorldRunner::run_with_cancel(Arc::new(instances::djibouti()), &config, Some(cancel))
            .unwrap();
    assert!(result.cancelled);
    for world in &result.worlds {
        assert!(world.cancelled);
        assert!(world.generations < 100_000);
        assert_eq!(world.score_history.len(), world.generations + 1);
    }
}

#[test]
fn test_engine_against_lettered_instance() {
    let config = GaConfig::default().with_population_size(100);
    let mut ga = TspGa::new(Arc::new(instances::lettered()), &config, 26).unwrap();
    ga.create_initial_population(100).unwrap();
    let (_, initial) = ga.fittest().unwrap();
    let mut best = initial;
    for _ in 0..500 {
        best = ga.evolve().unwrap().1;
    }
    assert!(best < initial);
    assert_eq!(ga.generation(), 500);
}
