//! Execution-phase guard
//!
//! Each entry point follows the same transaction: check the enforcement flag,
//! apply the category's exemption policy, synthesize one problem record and
//! forward it to the collector. Nothing is raised to the violating caller and
//! no state survives the call.

use super::classifier::GeneratedTypeClassifier;
use super::synthesis::{
    listener_registration_problem, resolve_task_trace, task_execution_access_problem,
};
use super::traits::{ListenerHandle, ProblemCollector, TaskHandle, TypeClassifier, ViolationHooks};
use execguard_core::{
    EnforcementFlag, GuardConfig, InvocationDescriptor, ProblemRecord, SourceTrace,
    ViolationCategory,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Reports restricted API use during task execution.
///
/// Cheap to share across task-execution threads: the flag is read-only and
/// the collector is responsible for its own synchronisation.
pub struct ExecutionPhaseGuard<C> {
    flag: EnforcementFlag,
    collector: C,
    classifier: Arc<dyn TypeClassifier>,
}

impl<C: ProblemCollector> ExecutionPhaseGuard<C> {
    /// Create a guard with the default [`GeneratedTypeClassifier`].
    pub fn new(flag: EnforcementFlag, collector: C) -> Self {
        Self {
            flag,
            collector,
            classifier: Arc::new(GeneratedTypeClassifier::default()),
        }
    }

    /// Create a guard from loaded configuration.
    pub fn from_config(config: &GuardConfig, collector: C) -> Self {
        Self::new(config.flag(), collector)
    }

    /// Replace the task type classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl TypeClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// The enforcement flag fixed at construction.
    pub fn flag(&self) -> EnforcementFlag {
        self.flag
    }

    /// The collector problems are forwarded to.
    pub fn collector(&self) -> &C {
        &self.collector
    }

    /// A task accessed its owning project while executing.
    pub fn report_project_access(&self, invocation: &str, task: &dyn TaskHandle) {
        self.report_task_execution_access(ViolationCategory::ProjectAccess, invocation, task);
    }

    /// A task accessed its task dependencies while executing.
    ///
    /// Shares the project-access path today; kept separate so wording and
    /// suppressions can diverge per category.
    pub fn report_task_dependencies_access(&self, invocation: &str, task: &dyn TaskHandle) {
        self.report_task_execution_access(
            ViolationCategory::TaskDependenciesAccess,
            invocation,
            task,
        );
    }

    /// A build-scoped listener was registered by `source`.
    ///
    /// Internal-framework and project-evaluation listeners are exempt.
    /// Registration has no single owning task, so the trace is always unknown.
    pub fn report_listener_registration(
        &self,
        listener: &dyn ListenerHandle,
        invocation: &str,
        source: &dyn fmt::Display,
    ) {
        let category = ViolationCategory::ListenerRegistration;
        if !self.is_enforcing(category) {
            return;
        }
        if let Some(capability) = listener.capabilities().exemption() {
            debug!(
                category = %category,
                invocation,
                capability = %capability,
                "Listener registration exempt"
            );
            return;
        }

        let invocation = self.descriptor(category, invocation);
        let problem =
            listener_registration_problem(SourceTrace::Unknown, &invocation, &source.to_string());
        self.forward(category, &invocation, problem);
    }

    fn report_task_execution_access(
        &self,
        category: ViolationCategory,
        invocation: &str,
        task: &dyn TaskHandle,
    ) {
        if !self.is_enforcing(category) {
            return;
        }

        let invocation = self.descriptor(category, invocation);
        let trace = resolve_task_trace(self.classifier.as_ref(), task);
        let problem = task_execution_access_problem(trace, &invocation, &task.describe());
        self.forward(category, &invocation, problem);
    }

    fn is_enforcing(&self, category: ViolationCategory) -> bool {
        if self.flag.is_enabled() {
            return true;
        }
        trace!(category = %category, "Enforcement disabled, violation ignored");
        false
    }

    fn descriptor(&self, category: ViolationCategory, invocation: &str) -> InvocationDescriptor {
        if invocation.is_empty() {
            warn!(category = %category, "Violation reported with empty invocation descriptor");
        }
        InvocationDescriptor::new(invocation)
    }

    fn forward(
        &self,
        category: ViolationCategory,
        invocation: &InvocationDescriptor,
        problem: ProblemRecord,
    ) {
        debug!(
            category = %category,
            invocation = %invocation,
            trace = %problem.trace(),
            "Forwarding execution-phase problem"
        );
        self.collector.submit(problem);
    }
}

impl<C: ProblemCollector> ViolationHooks for ExecutionPhaseGuard<C> {
    fn on_project_access(&self, invocation: &str, task: &dyn TaskHandle) {
        self.report_project_access(invocation, task);
    }

    fn on_task_dependencies_access(&self, invocation: &str, task: &dyn TaskHandle) {
        self.report_task_dependencies_access(invocation, task);
    }

    fn on_listener_registration(
        &self,
        listener: &dyn ListenerHandle,
        invocation: &str,
        source: &dyn fmt::Display,
    ) {
        self.report_listener_registration(listener, invocation, source);
    }
}

impl<C: fmt::Debug> fmt::Debug for ExecutionPhaseGuard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionPhaseGuard")
            .field("flag", &self.flag)
            .field("collector", &self.collector)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::collector::InMemoryCollector;
    use execguard_core::{CapabilitySet, ListenerCapability};

    struct FakeTask {
        path: &'static str,
        runtime_type: &'static str,
    }

    impl TaskHandle for FakeTask {
        fn path(&self) -> &str {
            self.path
        }

        fn runtime_type(&self) -> &str {
            self.runtime_type
        }
    }

    fn jar_task() -> FakeTask {
        FakeTask {
            path: ":app:jar",
            runtime_type: "PackageTask_Decorated",
        }
    }

    fn guard(flag: EnforcementFlag) -> ExecutionPhaseGuard<InMemoryCollector> {
        ExecutionPhaseGuard::new(flag, InMemoryCollector::new())
    }

    #[test]
    fn test_project_access_reports_one_problem() {
        let guard = guard(EnforcementFlag::ENABLED);
        guard.report_project_access("getDestinationDir", &jar_task());

        let problems = guard.collector().problems();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].trace(), &SourceTrace::task("PackageTask", ":app:jar"));
        assert_eq!(
            problems[0].error().summary(),
            "Invocation of 'getDestinationDir' by task ':app:jar' at execution time is unsupported."
        );
    }

    #[test]
    fn test_task_dependencies_access_matches_project_access_shape() {
        let guard = guard(EnforcementFlag::ENABLED);
        guard.report_task_dependencies_access("getTaskDependencies", &jar_task());

        let problems = guard.collector().problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].message().has_reference("getTaskDependencies"));
        assert_eq!(problems[0].trace().task_path(), Some(":app:jar"));
    }

    #[test]
    fn test_disabled_guard_is_silent() {
        let guard = guard(EnforcementFlag::DISABLED);
        guard.report_project_access("getProject", &jar_task());
        guard.report_task_dependencies_access("getTaskDependencies", &jar_task());
        guard.report_listener_registration(&CapabilitySet::new(), "addTaskListener", &"build");
        assert!(guard.collector().is_empty());
    }

    #[test]
    fn test_exempt_listeners_are_skipped() {
        let guard = guard(EnforcementFlag::ENABLED);
        for capability in [
            ListenerCapability::InternalFramework,
            ListenerCapability::ProjectEvaluation,
        ] {
            let listener = CapabilitySet::new().with(capability);
            guard.report_listener_registration(&listener, "addListener", &"build");
        }
        assert!(guard.collector().is_empty());
    }

    #[test]
    fn test_listener_registration_has_unknown_trace() {
        let guard = guard(EnforcementFlag::ENABLED);
        let listener = CapabilitySet::new().with(ListenerCapability::TaskExecution);
        guard.report_listener_registration(&listener, "addTaskListener", &"root project 'demo'");

        let problems = guard.collector().problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].trace().is_unknown());
        assert_eq!(
            problems[0].error().summary(),
            "Listener registration 'addTaskListener' by root project 'demo' is unsupported."
        );
    }

    #[test]
    fn test_custom_classifier() {
        struct Fixed;
        impl TypeClassifier for Fixed {
            fn declared_type(&self, _task: &dyn TaskHandle) -> String {
                "Declared".to_string()
            }
        }

        let guard = guard(EnforcementFlag::ENABLED).with_classifier(Fixed);
        guard.report_project_access("getProject", &jar_task());
        assert_eq!(guard.collector().problems()[0].trace().task_type(), Some("Declared"));
    }

    #[test]
    fn test_empty_descriptor_still_reported() {
        let guard = guard(EnforcementFlag::ENABLED);
        guard.report_project_access("", &jar_task());
        assert_eq!(guard.collector().len(), 1);
    }

    #[test]
    fn test_from_config() {
        let guard = ExecutionPhaseGuard::from_config(&GuardConfig::enabled(), InMemoryCollector::new());
        assert!(guard.flag().is_enabled());
    }
}
