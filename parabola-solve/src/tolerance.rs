use serde::{Deserialize, Serialize};

use crate::Coefficients;

/// Numeric tolerances shared by the solver and the intersection engine.
///
/// Both components classify through the same thresholds, so a difference
/// equation that [`solve`](crate::solve) would call a repeated root is always
/// reported as a tangent intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// A discriminant is treated as zero when its magnitude is at most this
    /// fraction of `max(b², |4ac|)`.
    pub discriminant_rel_tol: f64,
    /// Two coefficients are equal when they differ by at most this fraction
    /// of the larger magnitude.
    pub coefficient_rel_tol: f64,
    /// Absolute distance under which two intersection points are merged.
    pub duplicate_point_tol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            discriminant_rel_tol: 1e-9,
            coefficient_rel_tol: 1e-9,
            duplicate_point_tol: 1e-6,
        }
    }
}

impl Tolerance {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.discriminant_rel_tol.is_finite() || self.discriminant_rel_tol < 0.0 {
            return Err("discriminant_rel_tol must be finite and non-negative");
        }
        if !self.coefficient_rel_tol.is_finite() || self.coefficient_rel_tol < 0.0 {
            return Err("coefficient_rel_tol must be finite and non-negative");
        }
        if !self.duplicate_point_tol.is_finite() || self.duplicate_point_tol < 0.0 {
            return Err("duplicate_point_tol must be finite and non-negative");
        }
        Ok(())
    }

    /// Returns the magnitude below which the discriminant of `coefficients`
    /// counts as zero.
    pub(crate) fn discriminant_threshold(&self, coefficients: &Coefficients) -> f64 {
        let Coefficients { a, b, c } = *coefficients;
        self.discriminant_rel_tol * (b * b).max((4.0 * a * c).abs())
    }

    /// Returns `true` if `x` and `y` are equal within `coefficient_rel_tol`.
    pub(crate) fn coefficients_match(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.coefficient_rel_tol * x.abs().max(y.abs())
    }

    /// Returns `true` if two points lie within `duplicate_point_tol` on both axes.
    pub(crate) fn points_match(&self, p: [f64; 2], q: [f64; 2]) -> bool {
        (p[0] - q[0]).abs() < self.duplicate_point_tol
            && (p[1] - q[1]).abs() < self.duplicate_point_tol
    }
}
