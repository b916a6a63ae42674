//! Genetic Algorithm for the Traveling Salesman Problem.
//!
//! Each world evolves a population of tours over a shared, read-only
//! [`TspProblem`](crate::TspProblem). A generation keeps the fittest tour,
//! replaces eliminated tours with ordered-crossover children of selected
//! parents, applies swap mutation and re-scores. Many worlds run in parallel
//! and the shortest tour across all of them wins.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, generations, worlds, rates)
//! - [`TspGa`]: One world; `create_initial_population` then `evolve`
//! - [`WorldRunner`]: Runs independent worlds on a bounded thread pool
//! - [`RunResult`] / [`WorldResult`]: Final and per-world outcomes
//!
//! # Submodules
//!
//! - [`operators`]: Ordered crossover and swap mutation on index permutations
//! - [`selection`]: Fittest, elite and parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod engine;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{Elimination, GaConfig};
pub use engine::TspGa;
pub use fitness::tour_length;
pub use runner::{global_minimum, Cancellation, RunResult, WorldResult, WorldRunner};
pub use types::{Population, Tour};
