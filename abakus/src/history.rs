//! The in-memory calculation history of a session.

use crate::{Operation, Result, Summary};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The format used to display record timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The outcome of a single calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The computed value.
    Value(f64),
    /// The message describing why the calculation failed.
    Failure(String),
}

impl Outcome {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Failure(_) => None,
        }
    }

    /// Whether the calculation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Result<f64>> for Outcome {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

/// One calculation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// When the calculation was performed.
    pub timestamp: DateTime<Local>,
    /// The left operand.
    pub lhs: f64,
    /// The operation.
    pub operation: Operation,
    /// The right operand.
    pub rhs: f64,
    /// The result or the error message.
    pub outcome: Outcome,
}

impl Record {
    /// Evaluate `lhs operation rhs` now.
    #[must_use]
    pub fn evaluate(lhs: f64, operation: Operation, rhs: f64) -> Self {
        Self::evaluate_at(Local::now(), lhs, operation, rhs)
    }

    /// Evaluate `lhs operation rhs`, stamped with the given `timestamp`.
    #[must_use]
    pub fn evaluate_at(timestamp: DateTime<Local>, lhs: f64, operation: Operation, rhs: f64) -> Self {
        Self {
            timestamp,
            lhs,
            operation,
            rhs,
            outcome: operation.apply(lhs, rhs).into(),
        }
    }

    /// Whether the calculation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// The timestamp formatted as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// All calculations of a session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `lhs operation rhs`, append the record and return it.
    ///
    /// Failed calculations are recorded as well.
    pub fn record(&mut self, lhs: f64, operation: Operation, rhs: f64) -> &Record {
        self.push(Record::evaluate(lhs, operation, rhs))
    }

    /// Append an already evaluated record.
    pub fn push(&mut self, record: Record) -> &Record {
        log::debug!("Recording calculation: {:?}", record);
        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// The number of recorded calculations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no calculation was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Iterate over the records in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Condense the history into a `Summary`.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(self)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
