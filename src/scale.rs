//! Affine mappings between math-space and grid-space.
//!
//! The plane engine works in two coordinate systems: the continuous viewport
//! rectangle and the discrete character grid of the terminal. Both directions
//! of that mapping are a single affine transform.

use crate::error::{Error, Result};

/// Maps `value` from `domain` to `range` without validating either interval.
///
/// Total over all finite inputs; a degenerate domain produces non-finite
/// output, which callers are expected to prevent or skip. The viewport zoom
/// uses this with the domain `(1.0, 0.0)` to interpolate a bound toward its
/// center point.
#[must_use]
pub fn project(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    (value - domain.0) / (domain.1 - domain.0) * (range.1 - range.0) + range.0
}

/// Linear scale for continuous-to-continuous mapping.
///
/// The y-axis of the grid is mapped with an inverted range (`(rows, 0)`)
/// because grid row 0 is the top of the display while math-space y grows
/// upward.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain_min` equals `domain_max`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f64::EPSILON {
            return Err(Error::ScaleDomain("domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Transform a domain value to a range value.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Get the domain extent.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Get the range extent.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}
