use jiff::Timestamp;
use parabola_solve::Coefficients;
use serde::{Deserialize, Serialize};

/// A previously solved equation, as persisted by the surrounding application.
///
/// Serializes flat, as `{ "a", "b", "c", "timestamp", "label" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(flatten)]
    pub coefficients: Coefficients,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl HistoryRecord {
    /// Creates an unlabelled record.
    #[must_use]
    pub fn new(coefficients: impl Into<Coefficients>, timestamp: Timestamp) -> Self {
        Self {
            coefficients: coefficients.into(),
            timestamp,
            label: None,
        }
    }

    /// Attaches a label to the record.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
