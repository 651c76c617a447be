//! Execguard Guards prelude.
//!
//! Curated re-exports for hosts wiring a guard into their interception points.

pub use crate::guards::collector::{InMemoryCollector, TracingCollector};
pub use crate::guards::execution_phase::ExecutionPhaseGuard;
pub use crate::guards::traits::{
    ListenerHandle, ProblemCollector, TaskHandle, TypeClassifier, ViolationHooks,
};
pub use crate::guards::{GeneratedTypeClassifier, ViolationEvent};
pub use execguard_core::{
    CapabilitySet, EnforcementFlag, GuardConfig, InvocationDescriptor, ListenerCapability,
    ProblemRecord, SourceTrace, ViolationCategory,
};
