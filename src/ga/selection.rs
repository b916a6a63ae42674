//! Elite and parent selection.
//!
//! Parent selection is a hybrid elitist/uniform scheme rather than full
//! fitness-proportionate selection: half of the time the first parent is the
//! current fittest tour, otherwise it is drawn uniformly. The second parent is
//! always uniform and never the same tour as the first. This costs O(1) draws
//! per pair (plus the fittest scan) and applies weaker selection pressure
//! than roulette or rank selection.
//!
//! All scans assume **minimization** (lower score = better).

use super::types::Population;
use rand::Rng;

/// Probability that the first parent is the current fittest tour.
const FITTEST_PARENT_PROBABILITY: f64 = 0.5;

/// Returns the index and score of the fittest tour.
///
/// Linear scan with strict comparison, so the first of several equally fit
/// tours wins. Returns `None` for an empty population.
pub fn select_fittest(population: &Population) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, tour) in population.tours.iter().enumerate() {
        match best {
            Some((_, score)) if tour.score >= score => {}
            _ => best = Some((i, tour.score)),
        }
    }
    best
}

/// Returns the indices of the `k` fittest tours, best first.
///
/// Ties are broken by position. `k` larger than the population returns every
/// index.
pub fn select_elites(population: &Population, k: usize) -> Vec<usize> {
    if k == 1 {
        return select_fittest(population).map(|(i, _)| i).into_iter().collect();
    }
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.sort_by(|&a, &b| {
        population.tours[a]
            .score
            .partial_cmp(&population.tours[b].score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    indices.truncate(k);
    indices
}

/// Picks two distinct parent indices.
///
/// `fittest` is the index of the current fittest tour, as returned by
/// [`select_fittest`]. Callers scan once per generation and reuse it, so each
/// pair costs O(1) amortized draws.
///
/// # Panics
/// Panics if the population holds fewer than two tours.
pub fn select_parents<R: Rng>(
    population: &Population,
    fittest: usize,
    rng: &mut R,
) -> (usize, usize) {
    let n = population.len();
    assert!(n >= 2, "parent selection needs at least two tours");

    let p: f64 = rng.random();
    let first = if p <= FITTEST_PARENT_PROBABILITY {
        fittest
    } else {
        rng.random_range(0..n)
    };

    let mut second = rng.random_range(0..n);
    while second == first {
        second = rng.random_range(0..n);
    }
    (first, second)
}
