use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when solving or intersecting quadratics.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolveError {
    /// The leading coefficient is zero, so the equation is not quadratic.
    ///
    /// Callers that want linear handling must do so explicitly.
    #[error("not a quadratic: leading coefficient is zero (b = {b}, c = {c})")]
    NotQuadratic { b: f64, c: f64 },

    #[error("coefficient `{name}` is not finite: {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    /// An intermediate value overflowed to a non-finite number.
    #[error("numeric overflow while computing the {quantity}")]
    NumericOverflow { quantity: &'static str },

    #[error("invalid tolerance: {reason}")]
    InvalidConfig { reason: &'static str },
}
