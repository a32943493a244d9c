//! # Approx
//!
//! Approximate equality for floating-point results.
//!
//! Distances go through a square root, so tests compare against a tolerance
//! band rather than an exact literal:
//!
//! ```
//! use euclid::{approx, euclid, Point};
//! let d = euclid(&Point::from([0, 0]), &Point::from([1, 1])).unwrap();
//! assert_eq!(d, approx(1.41421356));
//! ```

use std::fmt;

/// Tolerance band for approximate comparison
///
/// `actual` matches `expected` when
/// `|actual - expected| <= max(rel * |expected|, abs)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the expected value
    pub rel: f64,

    /// Absolute tolerance, the floor of the band
    ///
    /// Matters when the expected value is zero or close to it.
    pub abs: f64,
}

impl Tolerance {
    /// Create a tolerance with explicit relative and absolute parts
    pub fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }

    /// Purely absolute tolerance
    pub fn absolute(abs: f64) -> Self {
        Self { rel: 0.0, abs }
    }

    /// Set the relative tolerance
    pub fn with_rel(mut self, rel: f64) -> Self {
        self.rel = rel;
        self
    }

    /// Set the absolute tolerance
    pub fn with_abs(mut self, abs: f64) -> Self {
        self.abs = abs;
        self
    }

    /// Width of the band around `expected`
    pub fn band(&self, expected: f64) -> f64 {
        (self.rel * expected.abs()).max(self.abs)
    }
}

impl Default for Tolerance {
    /// rel 1e-6, abs 1e-12
    fn default() -> Self {
        Self {
            rel: 1e-6,
            abs: 1e-12,
        }
    }
}

/// Whether `actual` is within `tol` of `expected`
///
/// Identical values always match, including equal infinities.
/// NaN never matches anything.
pub fn approx_eq(actual: f64, expected: f64, tol: Tolerance) -> bool {
    if actual == expected {
        return true;
    }
    if !actual.is_finite() || !expected.is_finite() {
        return false;
    }
    (actual - expected).abs() <= tol.band(expected)
}

/// An expected value that compares equal to any `f64` within its tolerance
///
/// Use with `assert_eq!` so failures print both the actual value and the
/// accepted band.
#[derive(Clone, Copy)]
pub struct Approx {
    expected: f64,
    tol: Tolerance,
}

impl Approx {
    /// Expect `expected` with the default tolerance
    pub fn new(expected: f64) -> Self {
        Self {
            expected,
            tol: Tolerance::default(),
        }
    }

    /// Override the tolerance
    pub fn tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// The expected value
    pub fn expected(&self) -> f64 {
        self.expected
    }
}

/// Shorthand for [`Approx::new`]
pub fn approx(expected: f64) -> Approx {
    Approx::new(expected)
}

impl fmt::Debug for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {:e}", self.expected, self.tol.band(self.expected))
    }
}

impl PartialEq<f64> for Approx {
    fn eq(&self, actual: &f64) -> bool {
        approx_eq(*actual, self.expected, self.tol)
    }
}

impl PartialEq<Approx> for f64 {
    fn eq(&self, expected: &Approx) -> bool {
        expected == self
    }
}
