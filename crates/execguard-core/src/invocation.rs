//! Invocation descriptors.

use serde::{Deserialize, Serialize};

/// Names the capability that was invoked, e.g. a property or method name.
///
/// Opaque to the guard: it is echoed into messages and causal errors verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationDescriptor(String);

impl InvocationDescriptor {
    /// Create a new descriptor.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the descriptor carries no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for InvocationDescriptor {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for InvocationDescriptor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&InvocationDescriptor> for InvocationDescriptor {
    fn from(value: &InvocationDescriptor) -> Self {
        value.clone()
    }
}

impl AsRef<str> for InvocationDescriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvocationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
