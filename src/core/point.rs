//! # Point
//!
//! A position in N-dimensional space. The input to every distance.
//!
//! Dimensionality is not fixed by the type. Two points only need to agree
//! with each other when they are compared.

use serde::{Deserialize, Serialize};

/// A point in dimensional space
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    dims: Vec<f64>,
}

impl Point {
    /// Create a new point from a vector of coordinates
    ///
    /// # Example
    /// ```
    /// use euclid::Point;
    /// let p = Point::new(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(p.dimensionality(), 3);
    /// ```
    pub fn new(dims: Vec<f64>) -> Self {
        Self { dims }
    }

    /// Create an origin point (all zeros) of given dimensionality
    ///
    /// # Example
    /// ```
    /// use euclid::Point;
    /// let origin = Point::origin(3);
    /// assert_eq!(origin.dims(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn origin(dims: usize) -> Self {
        Self {
            dims: vec![0.0; dims],
        }
    }

    /// Get the dimensionality of this point
    pub fn dimensionality(&self) -> usize {
        self.dims.len()
    }

    /// Whether this point has no coordinates at all
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Access the coordinates as a slice
    pub fn dims(&self) -> &[f64] {
        &self.dims
    }
}

impl From<Vec<f64>> for Point {
    fn from(dims: Vec<f64>) -> Self {
        Self::new(dims)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(dims: [f64; N]) -> Self {
        Self::new(dims.to_vec())
    }
}

// Integer grids are common call-site input; i32 -> f64 is lossless.
impl<const N: usize> From<[i32; N]> for Point {
    fn from(dims: [i32; N]) -> Self {
        dims.iter().map(|&x| f64::from(x)).collect()
    }
}

impl FromIterator<f64> for Point {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
