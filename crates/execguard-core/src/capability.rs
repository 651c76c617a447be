//! Listener capability tags
//!
//! Whoever constructs a listener value decides which capabilities it carries.
//! The guard only asks whether the set contains an exempt tag, so it needs no
//! knowledge of listener type hierarchies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability a listener value may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerCapability {
    /// Listener owned by the framework itself.
    InternalFramework,
    /// Listener observing project evaluation.
    ProjectEvaluation,
    /// Listener observing task execution.
    TaskExecution,
    /// Listener observing overall build lifecycle events.
    BuildLifecycle,
}

impl ListenerCapability {
    /// Returns `true` for capabilities that mark normal lifecycle wiring
    /// rather than user misuse.
    pub fn is_exempt(&self) -> bool {
        matches!(
            self,
            ListenerCapability::InternalFramework | ListenerCapability::ProjectEvaluation
        )
    }

    /// Stable identifier, suitable for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListenerCapability::InternalFramework => "internal_framework",
            ListenerCapability::ProjectEvaluation => "project_evaluation",
            ListenerCapability::TaskExecution => "task_execution",
            ListenerCapability::BuildLifecycle => "build_lifecycle",
        }
    }
}

impl std::fmt::Display for ListenerCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of capabilities carried by one listener value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<ListenerCapability>);

impl CapabilitySet {
    /// Empty set: an ordinary user listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, capability: ListenerCapability) -> Self {
        self.insert(capability);
        self
    }

    /// Add a capability. Returns `true` if it was not already present.
    pub fn insert(&mut self, capability: ListenerCapability) -> bool {
        self.0.insert(capability)
    }

    /// Membership test.
    pub fn contains(&self, capability: ListenerCapability) -> bool {
        self.0.contains(&capability)
    }

    /// First exempt capability in the set, if any.
    pub fn exemption(&self) -> Option<ListenerCapability> {
        self.0.iter().copied().find(ListenerCapability::is_exempt)
    }

    /// Returns `true` if any capability in the set is exempt.
    pub fn is_exempt(&self) -> bool {
        self.exemption().is_some()
    }

    /// Iterate capabilities in order.
    pub fn iter(&self) -> impl Iterator<Item = ListenerCapability> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ListenerCapability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = ListenerCapability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
