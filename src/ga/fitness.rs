//! Tour length evaluation.

use crate::geometry::{distance, City};

/// Total length of the closed tour visiting `cities` in `order`.
///
/// Sums consecutive legs and the closing leg from the last city back to the
/// first. Tours of zero or one city have length 0.
///
/// # Panics
/// Panics if `order` contains an index outside `cities`.
pub fn tour_length(cities: &[City], order: &[usize]) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let open: f64 = order
        .windows(2)
        .map(|leg| distance(&cities[leg[0]], &cities[leg[1]]))
        .sum();
    let last = order[order.len() - 1];
    open + distance(&cities[last], &cities[order[0]])
}
