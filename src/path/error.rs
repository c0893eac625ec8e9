use thiserror::Error;

/// Errors raised while building a flight path
#[derive(Debug, Error)]
pub enum FlightPathError {
    #[error("flight path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    #[error("samples per segment must be at least 2, got {samples}")]
    InvalidSampleCount { samples: usize },

    #[error("invalid path settings: {0}")]
    Settings(#[from] serde_json::Error),
}
