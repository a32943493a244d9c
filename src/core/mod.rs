//! # Core Domain
//!
//! Pure math, no I/O.
//!
//! - `Point` - A position in dimensional space
//! - `Metric` - Trait for measuring distance, with the `Euclidean` implementation
//! - `DistanceError` - Why two points could not be compared
//! - `approx` - Tolerance-based comparison for floating-point results
//!
//! All functions are pure (deterministic, no side effects beyond `log` records).

mod point;
mod error;
pub mod metric;
pub mod approx;

// Re-exports
pub use point::Point;
pub use error::{DistanceError, DistanceResult};
pub use metric::{euclid, Euclidean, Metric};
