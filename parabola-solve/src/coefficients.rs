use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SolveError;

/// The coefficients of `ax² + bx + c = 0`.
///
/// Construction never fails. Whether the triple describes a quadratic
/// (finite values, `a ≠ 0`) is checked by the operations that need it, so
/// malformed input is reported as a [`SolveError`] rather than silently fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Creates a coefficient triple.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates `ax² + bx + c` at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Returns `b² - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns the coefficients as an `[a, b, c]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Checks that every coefficient is finite.
    pub(crate) fn ensure_finite(&self) -> Result<(), SolveError> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !value.is_finite() {
                return Err(SolveError::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }

    /// Checks that the coefficients describe a finite quadratic.
    pub(crate) fn ensure_quadratic(&self) -> Result<(), SolveError> {
        self.ensure_finite()?;

        #[allow(clippy::float_cmp)]
        if self.a == 0.0 {
            return Err(SolveError::NotQuadratic {
                b: self.b,
                c: self.c,
            });
        }

        Ok(())
    }
}

impl From<(f64, f64, f64)> for Coefficients {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<[f64; 3]> for Coefficients {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// Formats the equation the way a person would write it, e.g. `x² - 5x + 6 = 0`.
#[allow(clippy::float_cmp)]
impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { a, b, c } = *self;

        if a == 1.0 {
            f.write_str("x²")?;
        } else if a == -1.0 {
            f.write_str("-x²")?;
        } else {
            write!(f, "{a}x²")?;
        }

        if b == 1.0 {
            f.write_str(" + x")?;
        } else if b == -1.0 {
            f.write_str(" - x")?;
        } else if b > 0.0 {
            write!(f, " + {b}x")?;
        } else if b < 0.0 {
            write!(f, " - {}x", b.abs())?;
        }

        if c > 0.0 {
            write!(f, " + {c}")?;
        } else if c < 0.0 {
            write!(f, " - {}", c.abs())?;
        }

        f.write_str(" = 0")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn evaluates_polynomial() {
        let coefficients = Coefficients::new(1.0, -5.0, 6.0);

        assert_relative_eq!(coefficients.evaluate(2.0), 0.0);
        assert_relative_eq!(coefficients.evaluate(3.0), 0.0);
        assert_relative_eq!(coefficients.evaluate(0.0), 6.0);
        assert_relative_eq!(coefficients.discriminant(), 1.0);
    }

    #[test]
    fn displays_like_handwritten_equation() {
        assert_eq!(Coefficients::new(1.0, -5.0, 6.0).to_string(), "x² - 5x + 6 = 0");
        assert_eq!(Coefficients::new(-1.0, 1.0, 0.0).to_string(), "-x² + x = 0");
        assert_eq!(Coefficients::new(2.5, -1.0, -4.0).to_string(), "2.5x² - x - 4 = 0");
        assert_eq!(Coefficients::new(3.0, 0.0, 0.0).to_string(), "3x² = 0");
    }

    #[test]
    fn rejects_zero_leading_coefficient() {
        let result = Coefficients::new(0.0, 1.0, 1.0).ensure_quadratic();
        assert!(matches!(result, Err(SolveError::NotQuadratic { .. })));
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        let result = Coefficients::new(1.0, f64::NAN, 1.0).ensure_quadratic();
        assert!(matches!(
            result,
            Err(SolveError::NonFiniteCoefficient { name: "b", .. })
        ));

        let result = Coefficients::new(1.0, 0.0, f64::NEG_INFINITY).ensure_finite();
        assert!(matches!(
            result,
            Err(SolveError::NonFiniteCoefficient { name: "c", .. })
        ));
    }
}
