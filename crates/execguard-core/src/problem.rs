//! Problem records and their causal errors.

use crate::message::StructuredMessage;
use crate::trace::SourceTrace;
use serde::{Deserialize, Serialize};

/// User code did something invalid during a restricted phase.
///
/// Attached to a [`ProblemRecord`] as its cause. It is never returned as `Err`
/// to the code that triggered the violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{summary}")]
pub struct InvalidUserCode {
    summary: String,
}

impl InvalidUserCode {
    /// Create a causal error with the given human-readable summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }

    /// The summary text.
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// Immutable diagnostic produced for exactly one detected violation.
///
/// Ownership moves to the collector on submission; nothing here keeps a copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemRecord {
    trace: SourceTrace,
    message: StructuredMessage,
    error: InvalidUserCode,
}

impl ProblemRecord {
    /// Bundle a trace, message and cause into a record.
    pub fn new(trace: SourceTrace, message: StructuredMessage, error: InvalidUserCode) -> Self {
        Self {
            trace,
            message,
            error,
        }
    }

    /// Where the violation originated.
    pub fn trace(&self) -> &SourceTrace {
        &self.trace
    }

    /// The structured diagnostic message.
    pub fn message(&self) -> &StructuredMessage {
        &self.message
    }

    /// The causal error.
    pub fn error(&self) -> &InvalidUserCode {
        &self.error
    }

    /// Split the record into its parts.
    pub fn into_parts(self) -> (SourceTrace, StructuredMessage, InvalidUserCode) {
        (self.trace, self.message, self.error)
    }
}

impl std::fmt::Display for ProblemRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.trace, self.message)
    }
}
