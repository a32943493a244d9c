//! # Metric
//!
//! Trait and implementation for measuring how far apart two points are.
//!
//! `Metric: fn(a, b) -> f64` - How far?
//!
//! The crate ships one metric, [`Euclidean`]. The trait exists so callers can
//! hold a metric behind `Arc<dyn Metric>` and swap it in tests.

use super::error::{DistanceError, DistanceResult};
use super::Point;

/// Trait for measuring the distance between points
pub trait Metric: Send + Sync {
    /// Compute the distance between two points
    ///
    /// Both points must have the same, non-zero dimensionality.
    fn distance(&self, a: &Point, b: &Point) -> DistanceResult<f64>;

    /// Name of this metric (for debugging/config)
    fn name(&self) -> &'static str;
}

/// Euclidean distance
///
/// The straight-line (L2) distance between two points.
/// Returns a value in [0, ∞) where 0 means identical.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> DistanceResult<f64> {
        check_comparable(a, b)?;

        let dist_sq: f64 = a
            .dims()
            .iter()
            .zip(b.dims().iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum();

        log::trace!("euclidean distance over {} dims", a.dimensionality());
        Ok(dist_sq.sqrt())
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Euclidean distance between `a` and `b`
///
/// # Example
/// ```
/// use euclid::{euclid, Point};
/// let d = euclid(&Point::from([1, 2]), &Point::from([5, -1])).unwrap();
/// assert_eq!(d, 5.0);
/// ```
pub fn euclid(a: &Point, b: &Point) -> DistanceResult<f64> {
    Euclidean.distance(a, b)
}

fn check_comparable(a: &Point, b: &Point) -> DistanceResult<()> {
    if a.dimensionality() != b.dimensionality() {
        log::debug!(
            "rejecting points of differing dimensionality ({} vs {})",
            a.dimensionality(),
            b.dimensionality()
        );
        return Err(DistanceError::DimensionMismatch {
            expected: a.dimensionality(),
            got: b.dimensionality(),
        });
    }
    if a.is_empty() {
        log::debug!("rejecting zero-dimensional points");
        return Err(DistanceError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::approx::{approx, approx_eq, Tolerance};
    use std::sync::Arc;

    #[test]
    fn test_identical_points() {
        let d = euclid(&Point::from([1, 1]), &Point::from([1, 1])).unwrap();
        assert_eq!(d, approx(0.0));
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_three_four_five() {
        let d = euclid(&Point::from([1, 2]), &Point::from([5, -1])).unwrap();
        // sqrt(16 + 9) = 5
        assert_eq!(d, approx(5.0));
    }

    #[test]
    fn test_unit_diagonal() {
        let d = euclid(&Point::from([0, 0]), &Point::from([1, 1])).unwrap();
        assert_eq!(d, approx(std::f64::consts::SQRT_2));
    }

    #[test]
    fn test_unit_diagonal_is_not_zero() {
        // A long-standing version of this case expected 0; the distance is sqrt(2).
        let d = euclid(&Point::from([0, 0]), &Point::from([1, 1])).unwrap();
        assert_ne!(d, approx(0.0));
    }

    #[test]
    fn test_higher_dimensions() {
        let a = Point::new(vec![1.0, 2.0, 3.0]);
        let b = Point::new(vec![4.0, 5.0, 6.0]);
        // sqrt(9 + 9 + 9)
        assert_eq!(euclid(&a, &b).unwrap(), approx(27.0_f64.sqrt()));
    }

    #[test]
    fn test_single_dimension() {
        let d = euclid(&Point::from([-3.0]), &Point::from([4.5])).unwrap();
        assert_eq!(d, approx(7.5));
    }

    #[test]
    fn test_self_distance_is_zero() {
        let points = [
            Point::from([0.1, -7.25, 1e9]),
            Point::origin(16),
            Point::from([f64::MIN_POSITIVE, 3.0]),
        ];
        for p in &points {
            assert_eq!(euclid(p, p).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_symmetry_is_exact() {
        let pairs = [
            (Point::from([0.1, 0.2, 0.3]), Point::from([-1.7, 9.0, 2.2])),
            (Point::from([1e-8, 3.0]), Point::from([1e8, -3.0])),
            (Point::from([1, 2]), Point::from([5, -1])),
        ];
        for (a, b) in &pairs {
            assert_eq!(euclid(a, b).unwrap(), euclid(b, a).unwrap());
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = [
            Point::from([0.0, 0.0, 0.0]),
            Point::from([1.0, 0.0, 0.0]),
            Point::from([0.0, 1.0, 0.0]),
            Point::from([-2.5, 3.5, 8.0]),
            Point::from([0.3, 0.3, 0.3]),
        ];
        let tol = Tolerance::default();
        for a in &points {
            for b in &points {
                for c in &points {
                    let ac = euclid(a, c).unwrap();
                    let bound = euclid(a, b).unwrap() + euclid(b, c).unwrap();
                    assert!(ac <= bound || approx_eq(ac, bound, tol));
                }
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Point::from([1.0, 2.0]);
        let b = Point::from([1.0, 2.0, 3.0]);
        assert_eq!(
            euclid(&a, &b),
            Err(DistanceError::DimensionMismatch { expected: 2, got: 3 })
        );
        assert_eq!(
            euclid(&b, &a),
            Err(DistanceError::DimensionMismatch { expected: 3, got: 2 })
        );
    }

    #[test]
    fn test_one_side_empty_is_mismatch() {
        let a = Point::new(Vec::new());
        let b = Point::from([1.0]);
        assert_eq!(
            euclid(&a, &b),
            Err(DistanceError::DimensionMismatch { expected: 0, got: 1 })
        );
    }

    #[test]
    fn test_empty_input() {
        let empty = Point::origin(0);
        assert_eq!(euclid(&empty, &empty), Err(DistanceError::EmptyInput));
    }

    #[test]
    fn test_dyn_metric() {
        let metric: Arc<dyn Metric> = Arc::new(Euclidean);
        assert_eq!(metric.name(), "euclidean");
        let d = metric
            .distance(&Point::from([0, 0]), &Point::from([3, 4]))
            .unwrap();
        assert_eq!(d, approx(5.0));
    }
}
