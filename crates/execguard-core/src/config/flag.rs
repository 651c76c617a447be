use serde::{Deserialize, Serialize};

/// Answers "is phase enforcement active right now".
///
/// `Copy` and read-only, so concurrent reads need no synchronisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnforcementFlag(bool);

impl EnforcementFlag {
    /// Enforcement active.
    pub const ENABLED: Self = Self(true);
    /// Enforcement inactive.
    pub const DISABLED: Self = Self(false);

    /// Create a flag from a boolean.
    pub const fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    /// Returns `true` if violations should be reported.
    pub const fn is_enabled(self) -> bool {
        self.0
    }
}

impl From<bool> for EnforcementFlag {
    fn from(enabled: bool) -> Self {
        Self(enabled)
    }
}

impl std::fmt::Display for EnforcementFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "enabled" } else { "disabled" })
    }
}
