//! Kinds of restricted interaction recognised by execution-phase guards.

use serde::{Deserialize, Serialize};

/// Closed set of restricted interactions.
///
/// New kinds of violation are added as variants; each variant selects its own
/// trace-resolution and message-building rule in the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// A task reached into its owning project while executing.
    ProjectAccess,
    /// A task queried the task dependency graph while executing.
    TaskDependenciesAccess,
    /// Code registered a build-scoped listener.
    ListenerRegistration,
}

impl ViolationCategory {
    /// All categories, in declaration order.
    pub const ALL: [ViolationCategory; 3] = [
        ViolationCategory::ProjectAccess,
        ViolationCategory::TaskDependenciesAccess,
        ViolationCategory::ListenerRegistration,
    ];

    /// Stable identifier, suitable for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCategory::ProjectAccess => "project_access",
            ViolationCategory::TaskDependenciesAccess => "task_dependencies_access",
            ViolationCategory::ListenerRegistration => "listener_registration",
        }
    }

    /// Whether violations of this category are attributed to a concrete task.
    pub fn has_task_owner(&self) -> bool {
        !matches!(self, ViolationCategory::ListenerRegistration)
    }
}

impl std::fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
