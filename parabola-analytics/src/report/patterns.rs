use parabola_solve::{Coefficients, Solution};
use serde::{Deserialize, Serialize};

use crate::Config;

/// How often notable coefficient and root patterns occur.
///
/// A single record may match several patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCounts {
    /// `a = 1`.
    pub monic: usize,
    pub integer_coefficients: usize,
    /// Real roots that are all integers, i.e. the equation factors over the integers.
    pub integer_roots: usize,
    /// The discriminant is the square of an integer.
    pub perfect_square_discriminant: usize,
    /// At least one coefficient exceeds [`Config::large_coefficient`] in magnitude.
    pub large_coefficients: usize,
    /// At least one non-zero coefficient is below [`Config::small_coefficient`] in magnitude.
    pub small_coefficients: usize,
}

impl PatternCounts {
    #[allow(clippy::float_cmp)]
    pub(crate) fn record(&mut self, solution: &Solution, config: &Config) {
        let coefficients = solution.coefficients;
        let values = coefficients.to_array();
        let tol = config.integer_tol;

        if coefficients.a == 1.0 {
            self.monic += 1;
        }

        if has_integer_coefficients(&coefficients, tol) {
            self.integer_coefficients += 1;
        }

        if solution
            .roots
            .real()
            .is_some_and(|roots| roots.iter().all(|&root| is_integer(root, tol)))
        {
            self.integer_roots += 1;
        }

        if is_perfect_square(solution.discriminant, tol) {
            self.perfect_square_discriminant += 1;
        }

        if values.iter().any(|v| v.abs() > config.large_coefficient) {
            self.large_coefficients += 1;
        }

        if values
            .iter()
            .any(|v| *v != 0.0 && v.abs() < config.small_coefficient)
        {
            self.small_coefficients += 1;
        }
    }
}

/// A rough difficulty rating of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// Monic with small `b` and `c`.
    Simple,
    /// Integer coefficients.
    Moderate,
    /// Anything else.
    Complex,
}

impl Complexity {
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn of(coefficients: &Coefficients, config: &Config) -> Self {
        let Coefficients { a, b, c } = *coefficients;

        if a == 1.0 && b.abs() <= config.simple_coefficient && c.abs() <= config.simple_coefficient
        {
            Self::Simple
        } else if has_integer_coefficients(coefficients, config.integer_tol) {
            Self::Moderate
        } else {
            Self::Complex
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityCounts {
    pub simple: usize,
    pub moderate: usize,
    pub complex: usize,
}

impl ComplexityCounts {
    pub(crate) fn record(&mut self, complexity: Complexity) {
        match complexity {
            Complexity::Simple => self.simple += 1,
            Complexity::Moderate => self.moderate += 1,
            Complexity::Complex => self.complex += 1,
        }
    }
}

fn is_integer(value: f64, tol: f64) -> bool {
    value.is_finite() && (value - value.round()).abs() <= tol
}

fn has_integer_coefficients(coefficients: &Coefficients, tol: f64) -> bool {
    coefficients.to_array().iter().all(|&v| is_integer(v, tol))
}

fn is_perfect_square(value: f64, tol: f64) -> bool {
    is_integer(value, tol) && value.round() >= 0.0 && is_integer(value.round().sqrt(), tol)
}
