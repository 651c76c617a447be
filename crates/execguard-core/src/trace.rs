//! Source traces: where in the build graph a violation originated.
//!
//! Trace resolution never fails. When no owner can be attributed the trace
//! degrades to [`SourceTrace::Unknown`] instead of erroring.

use serde::{Deserialize, Serialize};

/// Attribution of a diagnostic to its origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceTrace {
    /// A concrete task, identified by its declared type and path.
    Task {
        /// Declared type of the task, with any generated decoration removed
        type_name: String,
        /// Path of the task in the build graph, e.g. `:app:jar`
        path: String,
    },
    /// No concrete owner could be determined.
    Unknown,
}

impl SourceTrace {
    /// Trace pointing at a concrete task.
    pub fn task(type_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Task {
            type_name: type_name.into(),
            path: path.into(),
        }
    }

    /// Returns `true` for the unattributable marker.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Task path, if this trace names a task.
    pub fn task_path(&self) -> Option<&str> {
        match self {
            Self::Task { path, .. } => Some(path),
            Self::Unknown => None,
        }
    }

    /// Task type, if this trace names a task.
    pub fn task_type(&self) -> Option<&str> {
        match self {
            Self::Task { type_name, .. } => Some(type_name),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for SourceTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task { type_name, path } => write!(f, "task '{path}' of type '{type_name}'"),
            Self::Unknown => write!(f, "unknown location"),
        }
    }
}
