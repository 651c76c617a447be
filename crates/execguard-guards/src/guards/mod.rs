//! Execution-phase guard components
//!
//! - [`traits`] - collaborator contracts consumed from and exposed to the host
//! - [`event`] - tagged violation events for single-entry dispatch
//! - [`synthesis`] - pure problem-record construction
//! - [`execution_phase`] - the guard deciding whether to report
//! - [`collector`] - reference collectors
//! - [`classifier`] - task type resolution

pub mod classifier;
pub mod collector;
pub mod event;
pub mod execution_phase;
pub mod synthesis;
pub mod traits;

pub use classifier::GeneratedTypeClassifier;
pub use collector::{InMemoryCollector, TracingCollector};
pub use event::ViolationEvent;
pub use execution_phase::ExecutionPhaseGuard;
pub use traits::{ListenerHandle, ProblemCollector, TaskHandle, TypeClassifier, ViolationHooks};
