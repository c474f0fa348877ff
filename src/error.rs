use thiserror::Error;

/// Top-level error type for detectable-point generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PointsError`].
pub type Result<T> = std::result::Result<T, PointsError>;
