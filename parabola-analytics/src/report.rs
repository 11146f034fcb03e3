//! The aggregate report and its sections.

mod patterns;
mod stats;
mod usage;

use std::collections::BTreeMap;

use parabola_solve::{Direction, Point, RootNature, SolveError};
use serde::{Deserialize, Serialize};

pub use patterns::{Complexity, ComplexityCounts, PatternCounts};
pub use stats::{CoefficientStats, Summary};

pub(crate) use stats::Samples;
pub use usage::Usage;

/// Aggregate statistics over a sequence of history records.
///
/// Every count is independent of the order of the input records. An empty
/// input produces [`Report::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Number of records read, including skipped ones.
    pub total: usize,
    /// Number of records that were classified.
    pub aggregated: usize,
    /// Records that could not be classified, in input order.
    pub skipped: Vec<SkippedRecord>,
    pub by_root_nature: RootNatureCounts,
    pub by_direction: DirectionCounts,
    pub patterns: PatternCounts,
    pub complexity: ComplexityCounts,
    pub vertex_quadrants: QuadrantCounts,
    /// Distribution of the coefficients and discriminant, if any record was classified.
    pub coefficient_stats: Option<CoefficientStats>,
    pub usage: Usage,
    /// Number of records carrying each label.
    pub labels: BTreeMap<String, usize>,
}

impl Report {
    /// Returns the share of classified records with each root nature, in percent.
    ///
    /// All shares are zero when nothing was classified.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn root_nature_percentages(&self) -> [(RootNature, f64); 3] {
        RootNature::ALL.map(|nature| {
            let share = match self.aggregated {
                0 => 0.0,
                n => self.by_root_nature.get(nature) as f64 / n as f64 * 100.0,
            };
            (nature, share)
        })
    }
}

/// A record left out of the report, with the reason it could not be classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// Position of the record in the input sequence.
    pub index: usize,
    pub reason: SolveError,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootNatureCounts {
    pub two_real: usize,
    pub repeated: usize,
    pub complex: usize,
}

impl RootNatureCounts {
    #[must_use]
    pub fn get(&self, nature: RootNature) -> usize {
        match nature {
            RootNature::TwoReal => self.two_real,
            RootNature::Repeated => self.repeated,
            RootNature::Complex => self.complex,
        }
    }

    pub(crate) fn record(&mut self, nature: RootNature) {
        match nature {
            RootNature::TwoReal => self.two_real += 1,
            RootNature::Repeated => self.repeated += 1,
            RootNature::Complex => self.complex += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionCounts {
    pub upward: usize,
    pub downward: usize,
}

impl DirectionCounts {
    pub(crate) fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Upward => self.upward += 1,
            Direction::Downward => self.downward += 1,
        }
    }
}

/// Where each parabola's vertex falls in the plane.
///
/// A vertex on either axis is counted as `on_axis` rather than in a quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantCounts {
    pub first: usize,
    pub second: usize,
    pub third: usize,
    pub fourth: usize,
    pub on_axis: usize,
}

impl QuadrantCounts {
    #[allow(clippy::float_cmp)]
    pub(crate) fn record(&mut self, vertex: Point) {
        let Point { x, y } = vertex;
        let slot = if x == 0.0 || y == 0.0 {
            &mut self.on_axis
        } else if x > 0.0 && y > 0.0 {
            &mut self.first
        } else if x < 0.0 && y > 0.0 {
            &mut self.second
        } else if x < 0.0 {
            &mut self.third
        } else {
            &mut self.fourth
        };
        *slot += 1;
    }
}
