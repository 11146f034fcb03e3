use serde::Serialize;
use tracing::{debug, trace};

use crate::{Coefficients, Point, Roots, Solution, SolveError, Tolerance};

/// Solves `ax² + bx + c = 0` with the default [`Tolerance`].
///
/// # Errors
///
/// Returns [`SolveError::NotQuadratic`] if `a` is zero, and an error if any
/// coefficient or intermediate value is non-finite.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Solution, SolveError> {
    solve_with(&Coefficients::new(a, b, c), &Tolerance::default())
}

/// Solves a quadratic using the given tolerances.
///
/// # Errors
///
/// Returns an error if the tolerance is invalid, `a` is zero, any coefficient
/// is non-finite, or an intermediate value overflows.
pub fn solve_with(
    coefficients: &Coefficients,
    tolerance: &Tolerance,
) -> Result<Solution, SolveError> {
    tolerance
        .validate()
        .map_err(|reason| SolveError::InvalidConfig { reason })?;

    coefficients.ensure_quadratic()?;

    let discriminant = coefficients.discriminant();
    if !discriminant.is_finite() {
        return Err(SolveError::NumericOverflow {
            quantity: "discriminant",
        });
    }

    let roots = classify(coefficients, discriminant, tolerance);
    if !roots.is_finite() {
        return Err(SolveError::NumericOverflow { quantity: "roots" });
    }

    let Coefficients { a, b, c } = *coefficients;
    let axis_of_symmetry = -b / (2.0 * a);
    let vertex = Point::new(axis_of_symmetry, c - b * b / (4.0 * a));
    if !vertex.x.is_finite() || !vertex.y.is_finite() {
        return Err(SolveError::NumericOverflow { quantity: "vertex" });
    }

    trace!(a, b, c, discriminant, nature = ?roots.nature(), "solved quadratic");

    Ok(Solution {
        coefficients: *coefficients,
        discriminant,
        roots,
        vertex,
        axis_of_symmetry,
        opens_upward: a > 0.0,
    })
}

/// Classifies and computes the roots of a quadratic with a known discriminant.
///
/// Expects finite coefficients with `a ≠ 0`.
/// Negating all three coefficients yields bit-identical roots, which keeps
/// intersections symmetric in their arguments.
pub(crate) fn classify(
    coefficients: &Coefficients,
    discriminant: f64,
    tolerance: &Tolerance,
) -> Roots {
    let Coefficients { a, b, c } = *coefficients;
    let threshold = tolerance.discriminant_threshold(coefficients);

    if discriminant.abs() <= threshold {
        return Roots::Repeated { root: -b / (2.0 * a) };
    }

    let sqrt_d = discriminant.abs().sqrt();

    if discriminant < 0.0 {
        return Roots::Complex {
            re: -b / (2.0 * a),
            im: (sqrt_d / (2.0 * a)).abs(),
        };
    }

    #[allow(clippy::float_cmp)]
    let (r1, r2) = if b == 0.0 {
        let r = (sqrt_d / (2.0 * a)).abs();
        (r, -r)
    } else {
        // Avoids cancellation between -b and √D.
        let q = -0.5 * (b + b.signum() * sqrt_d);
        (q / a, c / q)
    };

    Roots::TwoReal {
        larger: r1.max(r2),
        smaller: r1.min(r2),
    }
}

/// The outcome of solving a batch of equations.
///
/// Failures do not abort the batch; each is recorded with its input index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub solved: Vec<(usize, Solution)>,
    pub failed: Vec<(usize, SolveError)>,
}

impl BatchOutcome {
    /// Returns the number of equations processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.solved.len() + self.failed.len()
    }

    /// Returns the percentage of equations that solved, or 0 for an empty batch.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.solved.len() as f64 / total as f64 * 100.0,
        }
    }
}

/// Solves each equation in a sequence with the default [`Tolerance`].
pub fn solve_batch<I>(equations: I) -> BatchOutcome
where
    I: IntoIterator,
    I::Item: Into<Coefficients>,
{
    solve_batch_with(equations, &Tolerance::default())
}

/// Solves each equation in a sequence using the given tolerances.
pub fn solve_batch_with<I>(equations: I, tolerance: &Tolerance) -> BatchOutcome
where
    I: IntoIterator,
    I::Item: Into<Coefficients>,
{
    let mut outcome = BatchOutcome::default();

    for (index, equation) in equations.into_iter().enumerate() {
        match solve_with(&equation.into(), tolerance) {
            Ok(solution) => outcome.solved.push((index, solution)),
            Err(error) => outcome.failed.push((index, error)),
        }
    }

    debug!(
        solved = outcome.solved.len(),
        failed = outcome.failed.len(),
        "solved batch"
    );

    outcome
}
