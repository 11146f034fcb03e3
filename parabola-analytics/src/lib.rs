//! Aggregate statistics over a history of solved quadratic equations.
//!
//! [`aggregate`] is a pure reduction: it reads a sequence of
//! [`HistoryRecord`]s and produces a [`Report`]. Storage and retrieval of the
//! records belong to the caller.

mod aggregate;
mod config;
mod record;

pub mod report;

pub use aggregate::{Error, aggregate, aggregate_with};
pub use config::Config;
pub use record::HistoryRecord;
pub use report::{Report, SkippedRecord};
