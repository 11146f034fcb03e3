//! Intersection of two parabolas through their difference equation.
//!
//! Subtracting `B` from `A` leaves `(a1-a2)x² + (b1-b2)x + (c1-c2) = 0`,
//! whose real roots are the x-coordinates where the curves meet. When the
//! leading difference vanishes the equation degrades to a line or a
//! constant, which is handled explicitly rather than by the quadratic path.

mod pairwise;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Coefficients, Point, Roots, SolveError, Tolerance, quadratic::classify};

pub use pairwise::{
    CommonPoint, PairIntersection, PairwiseIntersections, intersect_all, intersect_all_with,
};

/// How two parabolas meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intersection {
    /// The curves never meet.
    Disjoint { separation: Separation },
    /// The curves meet at exactly one point.
    Single { point: Point, contact: Contact },
    /// The curves cross at two points, larger x first.
    Pair { points: [Point; 2] },
    /// Both equations describe the same curve.
    Coincident,
}

/// Why two parabolas never meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Separation {
    /// The difference equation has complex roots.
    ComplexDifference { discriminant: f64 },
    /// The curves are vertical translates of each other.
    ParallelOffset { offset: f64 },
}

/// How the curves behave at a single meeting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contact {
    /// The curves touch without crossing (repeated root of the difference).
    Tangent,
    /// The leading coefficients match and the difference is linear.
    Crossing,
}

/// A flat classification of [`Intersection`] values, used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntersectionKind {
    TwoPoints,
    Tangent,
    Crossing,
    NoRealIntersection,
    Parallel,
    Coincident,
}

impl Intersection {
    /// Returns the finite set of meeting points.
    ///
    /// Coincident curves meet everywhere and return an empty slice; check
    /// [`Intersection::count`] to tell them apart from disjoint curves.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Disjoint { .. } | Self::Coincident => &[],
            Self::Single { point, .. } => std::slice::from_ref(point),
            Self::Pair { points } => points,
        }
    }

    /// Returns the number of meeting points, or `None` if there are infinitely many.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Coincident => None,
            _ => Some(self.points().len()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> IntersectionKind {
        match self {
            Self::Pair { .. } => IntersectionKind::TwoPoints,
            Self::Single {
                contact: Contact::Tangent,
                ..
            } => IntersectionKind::Tangent,
            Self::Single {
                contact: Contact::Crossing,
                ..
            } => IntersectionKind::Crossing,
            Self::Disjoint {
                separation: Separation::ComplexDifference { .. },
            } => IntersectionKind::NoRealIntersection,
            Self::Disjoint {
                separation: Separation::ParallelOffset { .. },
            } => IntersectionKind::Parallel,
            Self::Coincident => IntersectionKind::Coincident,
        }
    }
}

/// Intersects two parabolas using the default [`Tolerance`].
///
/// # Errors
///
/// Returns an error if either equation is not a finite quadratic, or if the
/// difference equation overflows.
pub fn intersect(
    first: &Coefficients,
    second: &Coefficients,
) -> Result<Intersection, SolveError> {
    intersect_with(first, second, &Tolerance::default())
}

/// Intersects two parabolas using the given tolerances.
///
/// The result is symmetric: swapping the arguments yields an identical value.
///
/// # Errors
///
/// Returns an error if the tolerance is invalid, either equation is not a
/// finite quadratic, or the difference equation overflows.
pub fn intersect_with(
    first: &Coefficients,
    second: &Coefficients,
    tolerance: &Tolerance,
) -> Result<Intersection, SolveError> {
    tolerance
        .validate()
        .map_err(|reason| SolveError::InvalidConfig { reason })?;

    first.ensure_quadratic()?;
    second.ensure_quadratic()?;

    let difference = Coefficients::new(first.a - second.a, first.b - second.b, first.c - second.c);
    if difference.ensure_finite().is_err() {
        return Err(SolveError::NumericOverflow {
            quantity: "difference equation",
        });
    }

    // Averaging both curves keeps y independent of argument order.
    let point_at = |x: f64| Point::new(x, 0.5 * (first.evaluate(x) + second.evaluate(x)));

    let intersection = if !tolerance.coefficients_match(first.a, second.a) {
        let discriminant = difference.discriminant();
        if !discriminant.is_finite() {
            return Err(SolveError::NumericOverflow {
                quantity: "difference discriminant",
            });
        }

        match classify(&difference, discriminant, tolerance) {
            Roots::TwoReal { larger, smaller } => Intersection::Pair {
                points: [point_at(larger), point_at(smaller)],
            },
            Roots::Repeated { root } => Intersection::Single {
                point: point_at(root),
                contact: Contact::Tangent,
            },
            Roots::Complex { .. } => Intersection::Disjoint {
                separation: Separation::ComplexDifference { discriminant },
            },
        }
    } else if !tolerance.coefficients_match(first.b, second.b) {
        Intersection::Single {
            point: point_at(-difference.c / difference.b),
            contact: Contact::Crossing,
        }
    } else if tolerance.coefficients_match(first.c, second.c) {
        Intersection::Coincident
    } else {
        Intersection::Disjoint {
            separation: Separation::ParallelOffset {
                offset: difference.c.abs(),
            },
        }
    };

    if intersection
        .points()
        .iter()
        .any(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(SolveError::NumericOverflow {
            quantity: "intersection point",
        });
    }

    trace!(%first, %second, kind = ?intersection.kind(), "intersected parabolas");

    Ok(intersection)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn coefficients(a: f64, b: f64, c: f64) -> Coefficients {
        Coefficients::new(a, b, c)
    }

    #[test]
    fn tangent_parabolas_meet_once() {
        let result = intersect(&coefficients(1.0, -5.0, 6.0), &coefficients(-1.0, 3.0, -2.0))
            .expect("should intersect");

        assert_eq!(result.kind(), IntersectionKind::Tangent);
        assert_eq!(result.count(), Some(1));
        let point = result.points()[0];
        assert_relative_eq!(point.x, 2.0);
        assert_relative_eq!(point.y, 0.0);
    }

    #[test]
    fn tangency_uses_the_same_threshold_as_solving() {
        let first = coefficients(1.0, -5.0, 6.0);
        let second = coefficients(-1.0, 3.0, -2.0 - 1e-15);
        let difference = Coefficients::new(
            first.a - second.a,
            first.b - second.b,
            first.c - second.c,
        );
        assert_ne!(difference.discriminant(), 0.0);

        let result = intersect(&first, &second).expect("should intersect");
        let Intersection::Single { point, contact } = result else {
            panic!("expected a single point, got {result:?}");
        };
        assert_eq!(contact, Contact::Tangent);
        assert_relative_eq!(point.x, 2.0);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-12);

        let solution = crate::solve_with(&difference, &Tolerance::default()).expect("should solve");
        assert_eq!(solution.roots, Roots::Repeated { root: 2.0 });

        let exact = Tolerance {
            discriminant_rel_tol: 0.0,
            ..Tolerance::default()
        };
        let result = intersect_with(&first, &second, &exact).expect("should intersect");
        assert_eq!(result.kind(), IntersectionKind::NoRealIntersection);
        let solution = crate::solve_with(&difference, &exact).expect("should solve");
        assert_eq!(solution.nature(), crate::RootNature::Complex);
    }

    #[test]
    fn crossing_parabolas_meet_twice() {
        // x² and -x² + 2 meet at x = ±1.
        let result = intersect(&coefficients(1.0, 0.0, 0.0), &coefficients(-1.0, 0.0, 2.0))
            .expect("should intersect");

        let Intersection::Pair { points } = result else {
            panic!("expected two points, got {result:?}");
        };
        assert_relative_eq!(points[0].x, 1.0);
        assert_relative_eq!(points[0].y, 1.0);
        assert_relative_eq!(points[1].x, -1.0);
        assert_relative_eq!(points[1].y, 1.0);
    }

    #[test]
    fn separated_parabolas_do_not_meet() {
        // x² + 1 lies entirely above -x².
        let result = intersect(&coefficients(1.0, 0.0, 1.0), &coefficients(-1.0, 0.0, 0.0))
            .expect("should intersect");

        assert_eq!(result.kind(), IntersectionKind::NoRealIntersection);
        assert_eq!(result.count(), Some(0));
        assert!(matches!(
            result,
            Intersection::Disjoint {
                separation: Separation::ComplexDifference { discriminant }
            } if discriminant < 0.0
        ));
    }

    #[test]
    fn linear_difference_crosses_once() {
        // x² + x and x² - x + 2 meet where 2x - 2 = 0.
        let result = intersect(&coefficients(1.0, 1.0, 0.0), &coefficients(1.0, -1.0, 2.0))
            .expect("should intersect");

        assert_eq!(result.kind(), IntersectionKind::Crossing);
        let point = result.points()[0];
        assert_relative_eq!(point.x, 1.0);
        assert_relative_eq!(point.y, 2.0);
    }

    #[test]
    fn vertical_translates_never_meet() {
        let result = intersect(&coefficients(2.0, 3.0, 1.0), &coefficients(2.0, 3.0, 4.0))
            .expect("should intersect");

        assert_eq!(
            result,
            Intersection::Disjoint {
                separation: Separation::ParallelOffset { offset: 3.0 }
            }
        );
        assert_eq!(result.count(), Some(0));
    }

    #[test]
    fn identical_parabolas_are_coincident() {
        let result = intersect(&coefficients(2.0, 3.0, 1.0), &coefficients(2.0, 3.0, 1.0))
            .expect("should intersect");

        assert_eq!(result, Intersection::Coincident);
        assert_eq!(result.count(), None);
        assert!(result.points().is_empty());
    }

    #[test]
    fn nearly_identical_leading_coefficients_are_treated_as_equal() {
        let result = intersect(
            &coefficients(1.0, 1.0, 0.0),
            &coefficients(1.0 + 1e-12, -1.0, 2.0),
        )
        .expect("should intersect");

        assert_eq!(result.kind(), IntersectionKind::Crossing);
    }

    #[test]
    fn swapping_arguments_gives_identical_result() {
        let first = coefficients(0.3, -1.7, 2.9);
        let second = coefficients(-2.1, 0.4, 5.3);

        let forward = intersect(&first, &second).expect("should intersect");
        let backward = intersect(&second, &first).expect("should intersect");

        assert_eq!(forward, backward);
    }

    #[test]
    fn rejects_non_quadratic_input() {
        let result = intersect(&coefficients(0.0, 1.0, 0.0), &coefficients(1.0, 0.0, 0.0));
        assert!(matches!(result, Err(SolveError::NotQuadratic { .. })));
    }

    #[test]
    fn rejects_overflowing_difference() {
        let result = intersect(&coefficients(f64::MAX, 0.0, 0.0), &coefficients(-f64::MAX, 0.0, 0.0));
        assert!(matches!(result, Err(SolveError::NumericOverflow { .. })));
    }
}
