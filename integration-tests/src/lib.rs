//! Shared fixtures for the cross-crate tests.

use jiff::Timestamp;
use parabola_analytics::HistoryRecord;
use parabola_solve::{Coefficients, RootNature};

/// A hand-checked equation with its known root nature and real roots.
pub struct SampleEquation {
    pub name: &'static str,
    pub coefficients: Coefficients,
    pub nature: RootNature,
    /// Real roots, larger first. Empty for complex roots.
    pub roots: &'static [f64],
}

/// Returns a small catalogue of equations covering every root nature and
/// both opening directions.
#[must_use]
pub fn sample_equations() -> Vec<SampleEquation> {
    vec![
        SampleEquation {
            name: "basic quadratic",
            coefficients: Coefficients::new(1.0, -5.0, 6.0),
            nature: RootNature::TwoReal,
            roots: &[3.0, 2.0],
        },
        SampleEquation {
            name: "difference of squares",
            coefficients: Coefficients::new(1.0, 0.0, -4.0),
            nature: RootNature::TwoReal,
            roots: &[2.0, -2.0],
        },
        SampleEquation {
            name: "perfect square trinomial",
            coefficients: Coefficients::new(1.0, -6.0, 9.0),
            nature: RootNature::Repeated,
            roots: &[3.0],
        },
        SampleEquation {
            name: "vertex at origin",
            coefficients: Coefficients::new(1.0, 0.0, 0.0),
            nature: RootNature::Repeated,
            roots: &[0.0],
        },
        SampleEquation {
            name: "no real roots",
            coefficients: Coefficients::new(1.0, 0.0, 1.0),
            nature: RootNature::Complex,
            roots: &[],
        },
        SampleEquation {
            name: "complex with real part",
            coefficients: Coefficients::new(1.0, 2.0, 5.0),
            nature: RootNature::Complex,
            roots: &[],
        },
        SampleEquation {
            name: "opens downward",
            coefficients: Coefficients::new(-1.0, 3.0, -2.0),
            nature: RootNature::TwoReal,
            roots: &[2.0, 1.0],
        },
        SampleEquation {
            name: "maximum at vertex",
            coefficients: Coefficients::new(-1.0, 4.0, -3.0),
            nature: RootNature::TwoReal,
            roots: &[3.0, 1.0],
        },
        SampleEquation {
            name: "non-monic with fractional roots",
            coefficients: Coefficients::new(2.0, -3.0, 1.0),
            nature: RootNature::TwoReal,
            roots: &[1.0, 0.5],
        },
    ]
}

/// Builds a history record from coefficients and an RFC 3339 timestamp.
///
/// # Panics
///
/// Panics if `at` is not a valid timestamp.
#[must_use]
pub fn record(coefficients: impl Into<Coefficients>, at: &str) -> HistoryRecord {
    let timestamp: Timestamp = at.parse().expect("fixture timestamps are valid");
    HistoryRecord::new(coefficients, timestamp)
}

/// Installs a test-friendly tracing subscriber, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
