//! # euclid
//!
//! Euclidean distance between two points of equal dimensionality.
//!
//! ## Usage
//!
//! ```rust
//! use euclid::{approx, euclid, DistanceError, Point};
//!
//! let d = euclid(&Point::from([1, 2]), &Point::from([5, -1])).unwrap();
//! assert_eq!(d, approx(5.0));
//!
//! let err = euclid(&Point::from([1.0, 2.0]), &Point::from([1.0])).unwrap_err();
//! assert_eq!(err, DistanceError::DimensionMismatch { expected: 2, got: 1 });
//! ```

pub mod core;

// Re-exports for convenience
pub use crate::core::{euclid, DistanceError, DistanceResult, Euclidean, Metric, Point};
pub use crate::core::approx::{approx, approx_eq, Approx, Tolerance};
