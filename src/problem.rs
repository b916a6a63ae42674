//! Problem instance: the fixed, validated list of cities a tour must visit.

use crate::error::{Result, TspError};
use crate::geometry::City;
use std::collections::HashSet;
use tracing::instrument;

/// A TSP instance of a declared size.
///
/// The size is fixed up front; cities are then added one by one. The
/// instance is complete once exactly `size` cities have been added, and only
/// complete instances can seed a population.
///
/// # Examples
///
/// ```
/// use tsp_ga::TspProblem;
///
/// let mut problem = TspProblem::new(3);
/// problem.add_city("a", 0.0, 0.0)?;
/// problem.add_city("b", 1.0, 0.0)?;
/// assert!(problem.validate().is_err());
///
/// problem.add_city("c", 0.0, 1.0)?;
/// assert!(problem.validate().is_ok());
/// # Ok::<(), tsp_ga::TspError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TspProblem {
    size: usize,
    cities: Vec<City>,
    names: HashSet<String>,
}

impl TspProblem {
    /// Creates an empty instance that expects `size` cities.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cities: Vec::with_capacity(size),
            names: HashSet::with_capacity(size),
        }
    }

    /// Builds a complete instance from a list of cities.
    ///
    /// Fails on an empty list, duplicate names or non-finite coordinates.
    #[instrument(level = "debug", skip(cities))]
    pub fn from_cities<I>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = City>,
    {
        let cities: Vec<City> = cities.into_iter().collect();
        let mut problem = Self::new(cities.len());
        for city in cities {
            problem.push(city)?;
        }
        problem.validate()?;
        Ok(problem)
    }

    /// Appends a city.
    ///
    /// Rejects names already in use, non-finite coordinates and additions
    /// beyond the declared size.
    pub fn add_city(&mut self, name: impl Into<String>, x: f64, y: f64) -> Result<()> {
        self.push(City::new(name, x, y))
    }

    fn push(&mut self, city: City) -> Result<()> {
        if self.cities.len() >= self.size {
            return Err(TspError::TooManyCities {
                expected: self.size,
                name: city.name().to_owned(),
            });
        }
        if !city.is_finite() {
            return Err(TspError::NonFiniteCoordinate {
                name: city.name().to_owned(),
                x: city.x(),
                y: city.y(),
            });
        }
        if !self.names.insert(city.name().to_owned()) {
            return Err(TspError::DuplicateCity(city.name().to_owned()));
        }
        self.cities.push(city);
        Ok(())
    }

    /// Checks that the instance is complete and non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(TspError::EmptyProblem);
        }
        if self.cities.len() != self.size {
            return Err(TspError::SizeMismatch {
                expected: self.size,
                actual: self.cities.len(),
            });
        }
        Ok(())
    }

    /// Declared number of cities (N).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cities added so far, in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city at `index` in insertion order, if any.
    pub fn city(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }
}
