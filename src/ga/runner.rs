//! Multi-world execution.
//!
//! [`WorldRunner`] fans a run out into independent worlds, each with its own
//! population and random stream, on a bounded thread pool, then fans the
//! results back in and keeps the shortest tour. Worlds never communicate; the
//! only shared state is the read-only problem and the cancellation flags.

use super::config::GaConfig;
use super::engine::TspGa;
use super::types::Tour;
use crate::error::{Result, TspError};
use crate::problem::TspProblem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use tracing::{debug, info, instrument, warn};

/// Outcome of one world.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldResult {
    /// Index of the world within the run.
    pub world: usize,

    /// Seed of the world's random stream.
    pub seed: u64,

    /// Fittest tour of the final generation.
    pub best_tour: Tour,

    /// Score of `best_tour`.
    pub best_score: f64,

    /// Generations actually evolved.
    pub generations: usize,

    /// Whether the world stopped early on cancellation.
    pub cancelled: bool,

    /// Fittest score after initialization and after each generation.
    pub score_history: Vec<f64>,
}

/// Outcome of a multi-world run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Minimum best score across all worlds.
    pub best_score: f64,

    /// Tour achieving `best_score`.
    pub best_tour: Tour,

    /// World that produced `best_tour`.
    pub best_world: usize,

    /// Whether any world stopped early on cancellation.
    pub cancelled: bool,

    /// Per-world results, ordered by world index.
    pub worlds: Vec<WorldResult>,
}

impl RunResult {
    /// Reduces per-world results to the global best.
    ///
    /// Ties keep the lowest world index. Returns `None` for an empty list.
    pub fn from_worlds(mut worlds: Vec<WorldResult>) -> Option<Self> {
        worlds.sort_by_key(|w| w.world);
        let (best_index, best_score) =
            global_minimum_by_index(worlds.iter().map(|w| w.best_score))?;
        let best = &worlds[best_index];
        Some(Self {
            best_score,
            best_tour: best.best_tour.clone(),
            best_world: best.world,
            cancelled: worlds.iter().any(|w| w.cancelled),
            worlds,
        })
    }
}

/// Minimum of a set of scores, `None` if empty.
///
/// ```
/// use tsp_ga::global_minimum;
///
/// assert_eq!(global_minimum([10.0, 7.0, 12.0, 7.0, 20.0]), Some(7.0));
/// assert_eq!(global_minimum(Vec::<f64>::new()), None);
/// ```
pub fn global_minimum<I: IntoIterator<Item = f64>>(scores: I) -> Option<f64> {
    global_minimum_by_index(scores).map(|(_, score)| score)
}

fn global_minimum_by_index<I: IntoIterator<Item = f64>>(scores: I) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, b)) if score >= b => {}
            _ => best = Some((i, score)),
        }
    }
    best
}

/// Cancellation state visible to every world of a run.
///
/// Combines the caller's flag with the runner's own abort flag, which is
/// raised as soon as any world fails.
#[derive(Debug)]
pub struct Cancellation {
    external: Option<Arc<AtomicBool>>,
    abort: AtomicBool,
}

impl Cancellation {
    fn new(external: Option<Arc<AtomicBool>>) -> Self {
        Self {
            external,
            abort: AtomicBool::new(false),
        }
    }

    /// Returns `true` once the run should stop.
    pub fn is_cancelled(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
            || self
                .external
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn abort(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }
}

/// Runs independent GA worlds in parallel.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use tsp_ga::{instances, GaConfig, WorldRunner};
///
/// let config = GaConfig::default()
///     .with_worlds(4)
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = WorldRunner::run(Arc::new(instances::lettered()), &config)?;
/// assert_eq!(result.worlds.len(), 4);
/// assert!(result.worlds.iter().all(|w| w.best_score >= result.best_score));
/// # Ok::<(), tsp_ga::TspError>(())
/// ```
pub struct WorldRunner;

impl WorldRunner {
    /// Runs `config.worlds` worlds of `config.max_generations` generations
    /// each and returns the best tour found.
    pub fn run(problem: Arc<TspProblem>, config: &GaConfig) -> Result<RunResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the worlds with an optional cancellation token.
    ///
    /// Each world checks the flag before every generation. Once it is set,
    /// worlds stop and report the best tour of their last completed
    /// generation.
    #[instrument(level = "debug", skip(problem, config, cancel), fields(cities = problem.size(), worlds = config.worlds))]
    pub fn run_with_cancel(
        problem: Arc<TspProblem>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult> {
        config.validate()?;
        problem.validate()?;

        let worlds = Self::run_worlds(config, cancel, |world, seed, cancellation| {
            run_world(&problem, config, world, seed, cancellation)
        })?;
        let result = RunResult::from_worlds(worlds)
            .ok_or_else(|| TspError::invalid_config("worlds must be at least 1"))?;

        info!(
            best_score = result.best_score,
            best_world = result.best_world,
            cancelled = result.cancelled,
            "run finished"
        );
        Ok(result)
    }

    /// Generic fan-out/fan-in over `config.worlds` worlds.
    ///
    /// World `i` is called with its index, its seed
    /// (`base_seed + i`, wrapping) and the shared [`Cancellation`]. Worlds
    /// run on a dedicated pool of at most `config.max_threads` threads and
    /// report through a channel sized to the number of worlds, so no world
    /// ever blocks on reporting. Exactly one result per world is collected,
    /// returned in world order.
    ///
    /// The first world to fail raises the abort flag for all others; its
    /// error is returned once every world has reported.
    pub fn run_worlds<T, F>(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        world_fn: F,
    ) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize, u64, &Cancellation) -> Result<T> + Sync,
    {
        config.validate()?;

        let world_count = config.worlds;
        let threads = config.max_threads.map_or(0, |t| t.min(world_count));
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("tsp-world-{i}"))
            .build()
            .map_err(|e| TspError::ThreadPool(e.to_string()))?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let cancellation = Cancellation::new(cancel);
        let (tx, rx) = mpsc::sync_channel::<(usize, Result<T>)>(world_count);

        debug!(
            world_count,
            threads = pool.current_num_threads(),
            base_seed,
            "launching worlds"
        );

        let senders: Vec<_> = (0..world_count).map(|_| tx.clone()).collect();
        drop(tx);

        pool.scope(|scope| {
            for (world, tx) in senders.into_iter().enumerate() {
                let world_fn = &world_fn;
                let cancellation = &cancellation;
                scope.spawn(move |_| {
                    let seed = base_seed.wrapping_add(world as u64);
                    let outcome = world_fn(world, seed, cancellation);
                    if let Err(ref e) = outcome {
                        warn!(world, error = %e, "world failed, aborting run");
                        cancellation.abort();
                    }
                    // Capacity equals the number of worlds and `rx` outlives the
                    // scope, so the send neither blocks nor fails.
                    let sent = tx.send((world, outcome));
                    debug_assert!(
                        sent.is_ok(),
                        "result channel closed before world {world} reported"
                    );
                });
            }
        });

        let mut slots: Vec<Option<T>> = (0..world_count).map(|_| None).collect();
        let mut failure: Option<TspError> = None;
        for (world, outcome) in rx.iter().take(world_count) {
            match outcome {
                Ok(value) => slots[world] = Some(value),
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(TspError::world_failed(world, e));
                    }
                }
            }
        }
        if let Some(e) = failure {
            return Err(e);
        }

        let results: Vec<T> = slots.into_iter().flatten().collect();
        if results.len() != world_count {
            return Err(TspError::invalid_config(format!(
                "expected {world_count} world results, collected {}",
                results.len()
            )));
        }
        Ok(results)
    }
}

/// Evolves one world to completion or cancellation.
fn run_world(
    problem: &Arc<TspProblem>,
    config: &GaConfig,
    world: usize,
    seed: u64,
    cancellation: &Cancellation,
) -> Result<WorldResult> {
    let mut ga = TspGa::new(Arc::clone(problem), config, seed)?;
    ga.create_initial_population(config.population_size)?;

    let mut score_history = Vec::with_capacity(config.max_generations + 1);
    score_history.push(ga.fittest()?.1);

    let mut cancelled = false;
    for _ in 0..config.max_generations {
        if cancellation.is_cancelled() {
            cancelled = true;
            break;
        }
        let (_, score) = ga.evolve()?;
        score_history.push(score);
    }

    let (tour, best_score) = ga.fittest()?;
    if cancelled {
        warn!(world, generations = ga.generation(), "world cancelled");
    }
    debug!(world, seed, best_score, generations = ga.generation(), "world finished");

    Ok(WorldResult {
        world,
        seed,
        best_tour: tour.clone(),
        best_score,
        generations: ga.generation(),
        cancelled,
        score_history,
    })
}

// ============================================================================
// Tests
// ============================================================================
