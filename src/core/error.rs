//! # Errors
//!
//! Why a distance could not be computed.

/// Result type for distance operations
pub type DistanceResult<T> = Result<T, DistanceError>;

/// Errors that can occur when comparing two points
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// The two points have different dimensionality
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Both points have zero coordinates
    #[error("empty input: points must have at least one coordinate")]
    EmptyInput,
}
