//! # Execguard Core - Diagnostic Vocabulary
//!
//! Shared data types for execution-phase guards:
//! - [`category`] - the closed set of restricted interactions
//! - [`invocation`] - what capability was invoked
//! - [`trace`] - where in the build graph a violation originated
//! - [`message`] - structured, segment-based diagnostic messages
//! - [`problem`] - the immutable problem record and its causal error
//! - [`capability`] - listener capability tags used for exemptions
//! - [`config`] - enforcement flag and guard configuration
//! - [`errors`] - the crate error type

pub mod capability;
pub mod category;
pub mod config;
pub mod errors;
pub mod invocation;
pub mod message;
pub mod problem;
pub mod trace;

pub use capability::{CapabilitySet, ListenerCapability};
pub use category::ViolationCategory;
pub use config::{EnforcementFlag, GuardConfig};
pub use errors::{CoreError, Result};
pub use invocation::InvocationDescriptor;
pub use message::{MessageSegment, StructuredMessage, StructuredMessageBuilder};
pub use problem::{InvalidUserCode, ProblemRecord};
pub use trace::SourceTrace;
