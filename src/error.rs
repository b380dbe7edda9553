//! Error types for route planning.

use thiserror::Error;

/// Error reported by a day-plan or accommodation collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("distance matrix unavailable: {0}")]
    DistanceUnavailable(#[from] DistanceError),

    #[error("day plan not found: {0}")]
    DayPlanNotFound(String),

    #[error("collaborator failed: {0}")]
    Collaborator(#[source] BoxError),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn collaborator(err: impl Into<BoxError>) -> Self {
        Self::Collaborator(err.into())
    }
}

/// Failure of a distance matrix provider.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: String, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
