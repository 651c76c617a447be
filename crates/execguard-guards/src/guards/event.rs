//! Tagged violation events for hosts that funnel every interception through
//! one call site.

use super::traits::{ListenerHandle, TaskHandle};
use execguard_core::ViolationCategory;
use std::fmt;

/// One detected violation, borrowed from the interception point.
#[derive(Clone, Copy)]
pub enum ViolationEvent<'a> {
    /// See [`ViolationCategory::ProjectAccess`].
    ProjectAccess {
        /// What was invoked
        invocation: &'a str,
        /// The executing task
        task: &'a dyn TaskHandle,
    },
    /// See [`ViolationCategory::TaskDependenciesAccess`].
    TaskDependenciesAccess {
        /// What was invoked
        invocation: &'a str,
        /// The executing task
        task: &'a dyn TaskHandle,
    },
    /// See [`ViolationCategory::ListenerRegistration`].
    ListenerRegistration {
        /// The value being registered
        listener: &'a dyn ListenerHandle,
        /// The registration call
        invocation: &'a str,
        /// Whoever performed the registration
        source: &'a dyn fmt::Display,
    },
}

impl ViolationEvent<'_> {
    /// Category of this event.
    pub fn category(&self) -> ViolationCategory {
        match self {
            Self::ProjectAccess { .. } => ViolationCategory::ProjectAccess,
            Self::TaskDependenciesAccess { .. } => ViolationCategory::TaskDependenciesAccess,
            Self::ListenerRegistration { .. } => ViolationCategory::ListenerRegistration,
        }
    }

    /// What was invoked.
    pub fn invocation(&self) -> &str {
        match self {
            Self::ProjectAccess { invocation, .. }
            | Self::TaskDependenciesAccess { invocation, .. }
            | Self::ListenerRegistration { invocation, .. } => invocation,
        }
    }
}

impl fmt::Debug for ViolationEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationEvent")
            .field("category", &self.category())
            .field("invocation", &self.invocation())
            .finish_non_exhaustive()
    }
}
