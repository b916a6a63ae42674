//! Tour and population containers.
//!
//! Tours store city *indices* into the owning [`TspProblem`](crate::TspProblem)
//! rather than references, so every generation owns its tours outright and a
//! carried-forward tour is an independent copy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One candidate solution: a visiting order over all cities.
///
/// The last city implicitly connects back to the first. `score` caches the
/// cyclic tour length and is refreshed by the engine after every change to
/// the order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    pub(crate) order: Vec<usize>,
    pub(crate) score: f64,
}

impl Tour {
    /// Wraps a visiting order. The score starts at infinity until evaluated.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            score: f64::INFINITY,
        }
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached cyclic tour length.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if the order visits every index in `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.order {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

/// The tours evolved together in one world.
///
/// `score` is the sum of all member scores. It is not derived on access;
/// the engine recomputes it with [`recompute_score`](Self::recompute_score)
/// once per generation, after every member has been re-scored.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Population {
    pub(crate) tours: Vec<Tour>,
    pub(crate) score: f64,
}

impl Population {
    pub(crate) fn from_tours(tours: Vec<Tour>) -> Self {
        let mut population = Self { tours, score: 0.0 };
        population.recompute_score();
        population
    }

    /// Member tours, in slot order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// The tour in slot `index`, if any.
    pub fn tour(&self, index: usize) -> Option<&Tour> {
        self.tours.get(index)
    }

    /// Aggregate score (sum of member scores).
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if the population holds no tours.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Sets the aggregate score to the sum of the current member scores.
    pub fn recompute_score(&mut self) -> f64 {
        self.score = self.tours.iter().map(|t| t.score).sum();
        self.score
    }
}
