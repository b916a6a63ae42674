//! Multi-world genetic algorithm for the Traveling Salesman Problem.
//!
//! Approximates the shortest closed tour through a set of named points by
//! evolving many independent populations ("worlds") in parallel and keeping
//! the best tour any of them finds:
//!
//! - **Problem**: [`TspProblem`] — a declared number of uniquely named
//!   [`City`] points, validated on construction.
//! - **Engine**: [`TspGa`] — one world: elitism, elimination, ordered
//!   crossover, swap mutation, re-scoring.
//! - **Runner**: [`WorldRunner`] — bounded fan-out of worlds, fan-in of their
//!   results, global minimum.
//!
//! Results are heuristic; no run is guaranteed to find the optimal tour.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tsp_ga::{GaConfig, TspProblem, WorldRunner};
//!
//! let mut problem = TspProblem::new(4);
//! problem.add_city("a", 0.0, 0.0)?;
//! problem.add_city("b", 0.0, 1.0)?;
//! problem.add_city("c", 1.0, 1.0)?;
//! problem.add_city("d", 1.0, 0.0)?;
//!
//! let config = GaConfig::fast().with_worlds(2).with_seed(7);
//! let result = WorldRunner::run(Arc::new(problem), &config)?;
//! assert!((result.best_score - 4.0).abs() < 1e-9);
//! # Ok::<(), tsp_ga::TspError>(())
//! ```

pub mod error;
pub mod ga;
pub mod geometry;
pub mod instances;
pub mod problem;

pub use error::{Result, TspError};
pub use ga::{
    global_minimum, tour_length, Elimination, GaConfig, RunResult, TspGa, WorldResult,
    WorldRunner,
};
pub use geometry::{distance, City};
pub use problem::TspProblem;
