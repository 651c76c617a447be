//! Task type resolution.

use super::traits::{TaskHandle, TypeClassifier};

/// Suffix hosts append to generated task subclasses.
pub const GENERATED_SUFFIX: &str = "_Decorated";

/// Strips generated-subclass decoration from runtime type names, so traces
/// name the type the user declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTypeClassifier {
    suffix: String,
}

impl Default for GeneratedTypeClassifier {
    fn default() -> Self {
        Self::with_suffix(GENERATED_SUFFIX)
    }
}

impl GeneratedTypeClassifier {
    /// Classifier for a host that decorates generated types with `suffix`.
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Declared type for a raw runtime type name.
    ///
    /// A name that is nothing but the suffix is returned unchanged.
    pub fn unpack<'a>(&self, runtime_type: &'a str) -> &'a str {
        if self.suffix.is_empty() {
            return runtime_type;
        }
        match runtime_type.strip_suffix(self.suffix.as_str()) {
            Some(declared) if !declared.is_empty() => declared,
            _ => runtime_type,
        }
    }
}

impl TypeClassifier for GeneratedTypeClassifier {
    fn declared_type(&self, task: &dyn TaskHandle) -> String {
        self.unpack(task.runtime_type()).to_string()
    }
}
