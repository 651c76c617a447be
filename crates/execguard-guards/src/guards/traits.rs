//! Collaborator contracts
//!
//! The guard consumes a collector, a type classifier and host-provided task and
//! listener values; it exposes [`ViolationHooks`] to interceptors.

use super::event::ViolationEvent;
use execguard_core::{CapabilitySet, ProblemRecord};
use std::fmt;
use std::sync::Arc;

/// Receives problem records. Storage, deduplication and rendering are the
/// collector's concern.
///
/// Implementations must tolerate concurrent submission from many threads.
pub trait ProblemCollector: Send + Sync {
    /// Take ownership of one problem record.
    fn submit(&self, problem: ProblemRecord);
}

impl<C: ProblemCollector + ?Sized> ProblemCollector for Arc<C> {
    fn submit(&self, problem: ProblemRecord) {
        (**self).submit(problem);
    }
}

impl<C: ProblemCollector + ?Sized> ProblemCollector for Box<C> {
    fn submit(&self, problem: ProblemRecord) {
        (**self).submit(problem);
    }
}

impl<C: ProblemCollector + ?Sized> ProblemCollector for &C {
    fn submit(&self, problem: ProblemRecord) {
        (**self).submit(problem);
    }
}

/// A task owned by the host, as seen by the guard.
pub trait TaskHandle: Send + Sync {
    /// Path of the task in the build graph, e.g. `:app:jar`.
    fn path(&self) -> &str;

    /// Runtime type name. May carry generated-subclass decoration; a
    /// [`TypeClassifier`] turns it into the declared type.
    fn runtime_type(&self) -> &str;

    /// Owner description used in causal error text.
    fn describe(&self) -> String {
        format!("task '{}'", self.path())
    }
}

/// A value being registered as a listener.
pub trait ListenerHandle {
    /// Capabilities the listener advertises.
    fn capabilities(&self) -> &CapabilitySet;
}

impl ListenerHandle for CapabilitySet {
    fn capabilities(&self) -> &CapabilitySet {
        self
    }
}

/// Resolves the declared type of a task for trace construction.
pub trait TypeClassifier: Send + Sync {
    /// Declared type name of `task`. Must not fail.
    fn declared_type(&self, task: &dyn TaskHandle) -> String;
}

/// Flat interceptor interface, one method per violation category.
///
/// Every method is fire-and-forget: violations are reported, never raised to
/// the caller.
pub trait ViolationHooks {
    /// A task accessed its project while executing.
    fn on_project_access(&self, invocation: &str, task: &dyn TaskHandle);

    /// A task accessed task dependencies while executing.
    fn on_task_dependencies_access(&self, invocation: &str, task: &dyn TaskHandle);

    /// A build-scoped listener was registered.
    fn on_listener_registration(
        &self,
        listener: &dyn ListenerHandle,
        invocation: &str,
        source: &dyn fmt::Display,
    );

    /// Dispatch a tagged event to the matching hook.
    fn report(&self, event: ViolationEvent<'_>) {
        match event {
            ViolationEvent::ProjectAccess { invocation, task } => {
                self.on_project_access(invocation, task);
            }
            ViolationEvent::TaskDependenciesAccess { invocation, task } => {
                self.on_task_dependencies_access(invocation, task);
            }
            ViolationEvent::ListenerRegistration {
                listener,
                invocation,
                source,
            } => self.on_listener_registration(listener, invocation, source),
        }
    }
}
