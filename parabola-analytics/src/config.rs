use jiff::tz::TimeZone;
use parabola_solve::Tolerance;
use serde::{Deserialize, Serialize};

/// Configuration for [`aggregate_with`](crate::aggregate_with).
///
/// Missing fields take their default values when deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tolerances used to classify each record.
    pub tolerance: Tolerance,
    /// Time zone in which timestamps are bucketed by day, hour, and weekday.
    #[serde(with = "jiff::fmt::serde::tz::required")]
    pub time_zone: TimeZone,
    /// A coefficient with a larger magnitude is flagged as large.
    pub large_coefficient: f64,
    /// A non-zero coefficient with a smaller magnitude is flagged as small.
    pub small_coefficient: f64,
    /// Monic equations with `|b|` and `|c|` at most this are rated simple.
    pub simple_coefficient: f64,
    /// How close a value must be to an integer to count as one.
    pub integer_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            time_zone: TimeZone::UTC,
            large_coefficient: 100.0,
            small_coefficient: 0.01,
            simple_coefficient: 10.0,
            integer_tol: 1e-9,
        }
    }
}

impl Config {
    /// Validates the tolerance and that all thresholds are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.tolerance.validate()?;

        for (value, reason) in [
            (
                self.large_coefficient,
                "large_coefficient must be finite and non-negative",
            ),
            (
                self.small_coefficient,
                "small_coefficient must be finite and non-negative",
            ),
            (
                self.simple_coefficient,
                "simple_coefficient must be finite and non-negative",
            ),
            (self.integer_tol, "integer_tol must be finite and non-negative"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(reason);
            }
        }

        Ok(())
    }
}
