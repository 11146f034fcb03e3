use parabola_solve::solve_with;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    Config, HistoryRecord,
    report::{Complexity, Report, Samples, SkippedRecord},
};

/// Errors that can occur when configuring an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Aggregates history records into a [`Report`] using the default [`Config`].
///
/// Records that cannot be classified (for example `a = 0`) never abort the
/// aggregation. They are listed in [`Report::skipped`] and left out of every
/// other count.
pub fn aggregate<'a, I>(records: I) -> Report
where
    I: IntoIterator<Item = &'a HistoryRecord>,
{
    reduce(records, &Config::default())
}

/// Aggregates history records into a [`Report`] using the given [`Config`].
///
/// # Errors
///
/// Returns an error if the config is invalid. Malformed records are skipped
/// and reported, not returned as errors.
pub fn aggregate_with<'a, I>(records: I, config: &Config) -> Result<Report, Error>
where
    I: IntoIterator<Item = &'a HistoryRecord>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    Ok(reduce(records, config))
}

fn reduce<'a, I>(records: I, config: &Config) -> Report
where
    I: IntoIterator<Item = &'a HistoryRecord>,
{
    let mut report = Report::default();
    let mut samples = Samples::default();

    for (index, record) in records.into_iter().enumerate() {
        report.total += 1;

        let solution = match solve_with(&record.coefficients, &config.tolerance) {
            Ok(solution) => solution,
            Err(reason) => {
                warn!(index, %reason, "skipping history record");
                report.skipped.push(SkippedRecord { index, reason });
                continue;
            }
        };

        report.aggregated += 1;
        report.by_root_nature.record(solution.nature());
        report.by_direction.record(solution.direction());
        report.patterns.record(&solution, config);
        report
            .complexity
            .record(Complexity::of(&solution.coefficients, config));
        report.vertex_quadrants.record(solution.vertex);
        report.usage.record(record.timestamp, &config.time_zone);

        if let Some(label) = &record.label {
            *report.labels.entry(label.clone()).or_default() += 1;
        }

        samples.push(solution.coefficients.to_array(), solution.discriminant);
    }

    report.coefficient_stats = samples.summarize();

    debug!(
        total = report.total,
        aggregated = report.aggregated,
        skipped = report.skipped.len(),
        "aggregated history"
    );

    report
}
