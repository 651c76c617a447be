//! Problem-record synthesis
//!
//! Pure functions from violation facts to [`ProblemRecord`]s. Wording lives
//! here so it can change without touching the detection policy in
//! [`super::execution_phase`]. Equal inputs always yield equal records.

use super::traits::{TaskHandle, TypeClassifier};
use execguard_core::{
    InvalidUserCode, InvocationDescriptor, ProblemRecord, SourceTrace, StructuredMessage,
};

/// Trace for a violation owned by `task`.
pub fn resolve_task_trace(classifier: &dyn TypeClassifier, task: &dyn TaskHandle) -> SourceTrace {
    SourceTrace::task(classifier.declared_type(task), task.path())
}

/// Problem for project or task-dependency access while a task executes.
///
/// `owner` describes the violating task, e.g. `task ':app:jar'`.
pub fn task_execution_access_problem(
    trace: SourceTrace,
    invocation: &InvocationDescriptor,
    owner: &str,
) -> ProblemRecord {
    let error = InvalidUserCode::new(format!(
        "Invocation of '{invocation}' by {owner} at execution time is unsupported."
    ));
    let message = StructuredMessage::build(|b| {
        b.text("invocation of ")
            .reference(invocation.as_str())
            .text(" at execution time is unsupported.");
    });
    ProblemRecord::new(trace, message, error)
}

/// Problem for registering a build-scoped listener.
///
/// `source` describes whoever performed the registration.
pub fn listener_registration_problem(
    trace: SourceTrace,
    invocation: &InvocationDescriptor,
    source: &str,
) -> ProblemRecord {
    let error = InvalidUserCode::new(format!(
        "Listener registration '{invocation}' by {source} is unsupported."
    ));
    let message = StructuredMessage::build(|b| {
        b.text("registration of listener on ")
            .reference(invocation.as_str())
            .text(" is unsupported");
    });
    ProblemRecord::new(trace, message, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use execguard_core::MessageSegment;

    #[test]
    fn test_task_execution_access_wording() {
        let problem = task_execution_access_problem(
            SourceTrace::task("PackageTask", ":app:jar"),
            &InvocationDescriptor::new("getDestinationDir"),
            "task ':app:jar'",
        );

        assert_eq!(
            problem.error().summary(),
            "Invocation of 'getDestinationDir' by task ':app:jar' at execution time is unsupported."
        );
        assert_eq!(
            problem.message().segments(),
            &[
                MessageSegment::Text("invocation of ".into()),
                MessageSegment::Reference("getDestinationDir".into()),
                MessageSegment::Text(" at execution time is unsupported.".into()),
            ]
        );
        assert_eq!(problem.trace(), &SourceTrace::task("PackageTask", ":app:jar"));
    }

    #[test]
    fn test_listener_registration_wording() {
        let problem = listener_registration_problem(
            SourceTrace::Unknown,
            &InvocationDescriptor::new("addTaskListener"),
            "root project 'demo'",
        );

        assert_eq!(
            problem.error().summary(),
            "Listener registration 'addTaskListener' by root project 'demo' is unsupported."
        );
        assert_eq!(
            problem.message().segments(),
            &[
                MessageSegment::Text("registration of listener on ".into()),
                MessageSegment::Reference("addTaskListener".into()),
                MessageSegment::Text(" is unsupported".into()),
            ]
        );
        assert!(problem.trace().is_unknown());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let build = || {
            task_execution_access_problem(
                SourceTrace::task("Copy", ":lib:copy"),
                &InvocationDescriptor::new("getProject"),
                "task ':lib:copy'",
            )
        };
        assert_eq!(build(), build());
    }
}
