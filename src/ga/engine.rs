//! Single-world evolutionary loop.
//!
//! [`TspGa`] owns one population and one random stream and advances them a
//! generation at a time:
//! elitism → elimination → crossover → mutation → re-scoring.

use super::config::{Elimination, GaConfig};
use super::fitness::tour_length;
use super::operators::{ordered_crossover, swap_mutation};
use super::selection::{select_elites, select_fittest, select_parents};
use super::types::{Population, Tour};
use crate::error::{Result, TspError};
use crate::problem::TspProblem;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// One GA world over a shared, read-only problem instance.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use tsp_ga::{GaConfig, TspGa, TspProblem};
///
/// let mut problem = TspProblem::new(4);
/// problem.add_city("a", 0.0, 0.0)?;
/// problem.add_city("b", 0.0, 1.0)?;
/// problem.add_city("c", 1.0, 1.0)?;
/// problem.add_city("d", 1.0, 0.0)?;
///
/// let config = GaConfig::default().with_population_size(10);
/// let mut ga = TspGa::new(Arc::new(problem), &config, 42)?;
/// ga.create_initial_population(config.population_size)?;
/// for _ in 0..50 {
///     ga.evolve()?;
/// }
/// let (_, best) = ga.fittest()?;
/// assert!((best - 4.0).abs() < 1e-9);
/// # Ok::<(), tsp_ga::TspError>(())
/// ```
#[derive(Debug)]
pub struct TspGa {
    problem: Arc<TspProblem>,
    population: Option<Population>,
    rng: StdRng,
    mutation_rate: f64,
    elite_count: usize,
    elimination: Elimination,
    generation: usize,
}

impl TspGa {
    /// Creates a world for `problem` with its own random stream seeded from
    /// `seed`.
    ///
    /// The problem must be complete; the configuration must validate.
    #[instrument(level = "debug", skip(problem, config), fields(cities = problem.size()))]
    pub fn new(problem: Arc<TspProblem>, config: &GaConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        problem.validate()?;
        Ok(Self {
            problem,
            population: None,
            rng: StdRng::seed_from_u64(seed),
            mutation_rate: config.mutation_rate,
            elite_count: config.elite_count,
            elimination: config.elimination,
            generation: 0,
        })
    }

    /// Fills the population with `count` uniformly random tours.
    ///
    /// Replaces any existing population and resets the generation counter.
    #[instrument(level = "debug", skip(self), fields(cities = self.problem.size()))]
    pub fn create_initial_population(&mut self, count: usize) -> Result<()> {
        self.problem.validate()?;
        if count < 2 {
            return Err(TspError::invalid_config(
                "population_size must be at least 2",
            ));
        }
        if self.elite_count >= count {
            return Err(TspError::invalid_config(
                "elite_count too high: elites fill entire population",
            ));
        }

        let n = self.problem.size();
        let cities = self.problem.cities();
        let tours: Vec<Tour> = (0..count)
            .map(|_| {
                let mut order: Vec<usize> = (0..n).collect();
                order.shuffle(&mut self.rng);
                let score = tour_length(cities, &order);
                Tour { order, score }
            })
            .collect();

        let population = Population::from_tours(tours);
        debug!(
            population_score = population.score(),
            "initial population created"
        );
        self.population = Some(population);
        self.generation = 0;
        Ok(())
    }

    /// Advances the population by one generation.
    ///
    /// Returns the fittest tour of the new generation and its score. The
    /// fittest score never increases from one generation to the next.
    #[instrument(level = "trace", skip(self), fields(generation = self.generation + 1))]
    pub fn evolve(&mut self) -> Result<(&Tour, f64)> {
        let current = self
            .population
            .take()
            .ok_or(TspError::PopulationNotInitialized)?;
        let next = self.breed(&current);
        self.population = Some(next);
        self.generation += 1;
        self.fittest()
    }

    fn breed(&mut self, current: &Population) -> Population {
        let size = current.len();
        let elites = select_elites(current, self.elite_count);
        let fittest = elites[0];
        let fittest_score = current.tours[fittest].score;
        // Sum of every non-fittest score; zero when all tours are zero-length.
        let denominator = current.score - fittest_score;

        let mut tours: Vec<Tour> = Vec::with_capacity(size);
        tours.extend(elites.iter().map(|&i| current.tours[i].clone()));

        let mut eliminated = 0usize;
        for tour in &current.tours[self.elite_count..] {
            if self.is_eliminated(tour.score, fittest_score, denominator) {
                let (a, b) = select_parents(current, fittest, &mut self.rng);
                let order =
                    ordered_crossover(&current.tours[a].order, &current.tours[b].order, &mut self.rng);
                tours.push(Tour::new(order));
                eliminated += 1;
            } else {
                tours.push(tour.clone());
            }
        }

        let cities = self.problem.cities();
        for tour in &mut tours[self.elite_count..] {
            swap_mutation(&mut tour.order, self.mutation_rate, &mut self.rng);
            tour.score = tour_length(cities, &tour.order);
        }

        let next = Population::from_tours(tours);
        trace!(
            eliminated,
            population_score = next.score(),
            "generation bred"
        );
        next
    }

    /// Elimination test for one non-elite tour.
    ///
    /// Tours tied with the fittest are always replaced. A denominator that
    /// is not strictly positive, or a normalized score that is not finite,
    /// also counts as eliminated, so no NaN reaches the random test.
    fn is_eliminated(&mut self, score: f64, fittest_score: f64, denominator: f64) -> bool {
        if score == fittest_score {
            return true;
        }
        if denominator <= 0.0 {
            return true;
        }
        let normalized = score / denominator;
        if !normalized.is_finite() {
            return true;
        }
        let p: f64 = self.rng.random();
        self.elimination.eliminates(p, normalized)
    }

    /// The fittest tour of the current population and its score.
    pub fn fittest(&self) -> Result<(&Tour, f64)> {
        let population = self
            .population
            .as_ref()
            .ok_or(TspError::PopulationNotInitialized)?;
        let (index, score) = select_fittest(population).ok_or(TspError::PopulationNotInitialized)?;
        Ok((&population.tours[index], score))
    }

    /// The current population, if one has been created.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// The problem this world evolves tours for.
    pub fn problem(&self) -> &TspProblem {
        &self.problem
    }

    /// Number of generations evolved since the population was created.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

// ============================================================================
// Tests
// ============================================================================
