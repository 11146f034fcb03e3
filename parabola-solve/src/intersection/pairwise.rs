use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Coefficients, Point, SolveError, Tolerance};

use super::{Intersection, IntersectionKind, intersect_with};

/// The intersection of one pair of equations, identified by input index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairIntersection {
    pub first: usize,
    pub second: usize,
    pub intersection: Intersection,
}

/// A point shared by more than one pair of equations.
///
/// Coordinates are rounded to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommonPoint {
    pub point: Point,
    pub pairs: usize,
}

/// Pairwise intersections across a set of equations.
///
/// Each pair is intersected independently. No attempt is made to solve the
/// N-way system simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairwiseIntersections {
    /// Every pair `(i, j)` with `i < j`, in lexicographic order.
    pub pairs: Vec<PairIntersection>,
    /// All meeting points with near-duplicates merged.
    pub unique_points: Vec<Point>,
    /// Number of pairs of each kind.
    pub kinds: BTreeMap<IntersectionKind, usize>,
    /// Points where more than one pair meets.
    pub common_points: Vec<CommonPoint>,
}

impl PairwiseIntersections {
    /// Returns the number of pairs with the given kind.
    #[must_use]
    pub fn count_of(&self, kind: IntersectionKind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(0)
    }
}

/// Intersects every pair of equations using the default [`Tolerance`].
///
/// # Errors
///
/// Returns an error if any equation is not a finite quadratic, or if any
/// pair overflows.
pub fn intersect_all(equations: &[Coefficients]) -> Result<PairwiseIntersections, SolveError> {
    intersect_all_with(equations, &Tolerance::default())
}

/// Intersects every pair of equations using the given tolerances.
///
/// # Errors
///
/// Returns an error if the tolerance is invalid, any equation is not a finite
/// quadratic, or any pair overflows.
pub fn intersect_all_with(
    equations: &[Coefficients],
    tolerance: &Tolerance,
) -> Result<PairwiseIntersections, SolveError> {
    tolerance
        .validate()
        .map_err(|reason| SolveError::InvalidConfig { reason })?;

    for equation in equations {
        equation.ensure_quadratic()?;
    }

    let mut result = PairwiseIntersections::default();
    let mut rounded: BTreeMap<(i64, i64), usize> = BTreeMap::new();

    for (i, first) in equations.iter().enumerate() {
        for (j, second) in equations.iter().enumerate().skip(i + 1) {
            let intersection = intersect_with(first, second, tolerance)?;

            *result.kinds.entry(intersection.kind()).or_default() += 1;

            let keys: BTreeSet<_> = intersection.points().iter().map(round_key).collect();
            for key in keys {
                *rounded.entry(key).or_default() += 1;
            }

            for point in intersection.points() {
                let is_duplicate = result
                    .unique_points
                    .iter()
                    .any(|seen| tolerance.points_match([seen.x, seen.y], [point.x, point.y]));
                if !is_duplicate {
                    result.unique_points.push(*point);
                }
            }

            result.pairs.push(PairIntersection {
                first: i,
                second: j,
                intersection,
            });
        }
    }

    result.common_points = rounded
        .into_iter()
        .filter(|&(_, pairs)| pairs > 1)
        .map(|((x, y), pairs)| CommonPoint {
            point: Point::new(unround(x), unround(y)),
            pairs,
        })
        .collect();

    debug!(
        equations = equations.len(),
        pairs = result.pairs.len(),
        unique_points = result.unique_points.len(),
        common_points = result.common_points.len(),
        "intersected all pairs"
    );

    Ok(result)
}

/// Rounds a point to three decimals as an orderable key.
#[allow(clippy::cast_possible_truncation)]
fn round_key(point: &Point) -> (i64, i64) {
    (
        (point.x * 1000.0).round() as i64,
        (point.y * 1000.0).round() as i64,
    )
}

#[allow(clippy::cast_precision_loss)]
fn unround(value: i64) -> f64 {
    value as f64 / 1000.0
}
