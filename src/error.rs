//! Error type shared by problem construction, the GA engine and the
//! multi-world runner.

/// Errors surfaced by the public API.
///
/// Configuration and validation failures are reported before any population
/// is created. Numeric edge cases inside the evolutionary loop never produce
/// an error; they are handled by guarded branches in the engine.
#[derive(Debug, thiserror::Error)]
pub enum TspError {
    #[error("SizeMismatch: problem declared {expected} cities but {actual} were added")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("EmptyProblem: a problem needs at least one city")]
    EmptyProblem,

    #[error("TooManyCities: problem declared {expected} cities, cannot add '{name}'")]
    TooManyCities { expected: usize, name: String },

    #[error("DuplicateCity: city name '{0}' is already present")]
    DuplicateCity(String),

    #[error("NonFiniteCoordinate: city '{name}' has coordinates ({x}, {y})")]
    NonFiniteCoordinate { name: String, x: f64, y: f64 },

    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    #[error("PopulationNotInitialized: create_initial_population must run before evolve")]
    PopulationNotInitialized,

    #[error("WorldFailed: world {world} aborted: {source}")]
    WorldFailed {
        world: usize,
        #[source]
        source: Box<TspError>,
    },

    #[error("ThreadPool: {0}")]
    ThreadPool(String),
}

impl TspError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub(crate) fn world_failed(world: usize, source: TspError) -> Self {
        Self::WorldFailed {
            world,
            source: Box::new(source),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
