//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a multi-world run: the per-world
//! evolutionary loop and the fan-out across worlds.

use crate::error::{Result, TspError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a non-elite individual is judged for replacement each generation.
///
/// Both policies first eliminate any individual whose score equals the
/// generation's fittest score. They differ in the random test applied to the
/// rest, where `normalized = score / (population_score - fittest_score)` and
/// `p` is drawn uniformly from `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Elimination {
    /// Eliminated when `p >= normalized`.
    ///
    /// Shorter (better) tours have a smaller normalized score and are
    /// therefore replaced *more* often than longer ones. Kept as the default
    /// for compatibility with existing result baselines.
    #[default]
    AsFormulated,

    /// Eliminated when `p < normalized`.
    ///
    /// Longer tours are replaced more often, which is the usual direction of
    /// fitness-proportionate replacement.
    ScoreProportional,
}

impl Elimination {
    /// Applies the random test to a normalized score.
    #[inline]
    pub(crate) fn eliminates(self, p: f64, normalized: f64) -> bool {
        match self {
            Elimination::AsFormulated => p >= normalized,
            Elimination::ScoreProportional => p < normalized,
        }
    }
}

/// Configuration for a multi-world GA run.
///
/// # Defaults
///
/// ```
/// use tsp_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.worlds, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::{Elimination, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_worlds(8)
///     .with_mutation_rate(0.1)
///     .with_elimination(Elimination::ScoreProportional)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of tours in each world's population.
    pub population_size: usize,

    /// Generations evolved by each world.
    pub max_generations: usize,

    /// Number of independent worlds.
    pub worlds: usize,

    /// Probability that a non-elite tour receives a swap mutation
    /// each generation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of fittest tours copied unchanged into the next generation.
    pub elite_count: usize,

    /// Replacement policy for non-elite tours.
    pub elimination: Elimination,

    /// Base random seed. World `i` is seeded with `seed + i`.
    ///
    /// `None` draws a fresh base seed per run.
    pub seed: Option<u64>,

    /// Upper bound on worker threads running worlds concurrently.
    ///
    /// `None` uses the available parallelism of the machine.
    pub max_threads: Option<usize>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            worlds: 100,
            mutation_rate: 0.05,
            elite_count: 1,
            elimination: Elimination::default(),
            seed: None,
            max_threads: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations per world.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of worlds.
    pub fn with_worlds(mut self, n: usize) -> Self {
        self.worlds = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the elimination policy.
    pub fn with_elimination(mut self, elimination: Elimination) -> Self {
        self.elimination = elimination;
        self
    }

    /// Sets the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of worker threads.
    pub fn with_max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n);
        self
    }

    /// Preset for a quick look: few worlds, short runs.
    ///
    /// - Population: 50, Generations: 200, Worlds: 8
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            worlds: 8,
            ..Self::default()
        }
    }

    /// Preset for large instances: bigger populations and longer runs.
    ///
    /// - Population: 1000, Generations: 1000, Worlds: 100
    pub fn thorough() -> Self {
        Self {
            population_size: 1000,
            max_generations: 1000,
            worlds: 100,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Parent selection needs two distinct tours, so a population holds at
    /// least two, and at least one slot must remain for offspring after the
    /// elites.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TspError::invalid_config(
                "population_size must be at least 2",
            ));
        }
        if self.max_generations == 0 {
            return Err(TspError::invalid_config(
                "max_generations must be at least 1",
            ));
        }
        if self.worlds == 0 {
            return Err(TspError::invalid_config("worlds must be at least 1"));
        }
        if self.elite_count == 0 {
            return Err(TspError::invalid_config("elite_count must be at least 1"));
        }
        if self.elite_count >= self.population_size {
            return Err(TspError::invalid_config(
                "elite_count too high: elites fill entire population",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::invalid_config(
                "mutation_rate must be within [0, 1]",
            ));
        }
        if self.max_threads == Some(0) {
            return Err(TspError::invalid_config(
                "max_threads must be positive or None",
            ));
        }
        Ok(())
    }
}
