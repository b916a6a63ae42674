//! Named points in the plane and the Euclidean metric between them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A city: a named point with planar coordinates.
///
/// Names identify cities within a [`TspProblem`](crate::TspProblem) and must
/// be unique there. Cities are immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city. Coordinates are validated when the city joins a problem.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Unique city name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between two cities.
///
/// ```
/// use tsp_ga::{distance, City};
///
/// let a = City::new("a", 0.0, 0.0);
/// let b = City::new("b", 3.0, 4.0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
#[inline]
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        let a = City::new("a", 1.0, 1.0);
        let b = City::new("b", 4.0, 5.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = City::new("a", 11003.6111, 42102.5);
        let b = City::new("b", 12645.0, 42973.3333);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::new("a", -7.5, 2.25);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(City::new("ok", 1.0, 2.0).is_finite());
        assert!(!City::new("nan", f64::NAN, 2.0).is_finite());
        assert!(!City::new("inf", 1.0, f64::INFINITY).is_finite());
    }
}
