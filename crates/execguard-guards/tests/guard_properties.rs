//! Property tests for guard reporting
//!
//! - Enforced task-access reports yield exactly one problem naming the task
//! - A disabled guard never forwards anything
//! - Exempt listeners never produce problems
//! - Listener registration traces are always unknown
//! - Synthesis is deterministic

mod common;

use common::TestTask;
use execguard_guards::prelude::*;
use execguard_guards::synthesis::{listener_registration_problem, task_execution_access_problem};
use proptest::prelude::*;

fn arb_invocation() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,24}"
}

fn arb_task() -> impl Strategy<Value = TestTask> {
    (
        "[A-Z][a-zA-Z]{0,16}",
        proptest::collection::vec("[a-z][a-z0-9]{0,8}", 1..4),
        any::<bool>(),
    )
        .prop_map(|(type_name, segments, decorated)| {
            let runtime_type = if decorated {
                format!("{type_name}_Decorated")
            } else {
                type_name
            };
            TestTask::new(runtime_type, format!(":{}", segments.join(":")))
        })
}

fn arb_capabilities() -> impl Strategy<Value = CapabilitySet> {
    proptest::collection::vec(
        prop_oneof![
            Just(ListenerCapability::InternalFramework),
            Just(ListenerCapability::ProjectEvaluation),
            Just(ListenerCapability::TaskExecution),
            Just(ListenerCapability::BuildLifecycle),
        ],
        0..4,
    )
    .prop_map(|caps| caps.into_iter().collect::<CapabilitySet>())
}

fn guard(flag: EnforcementFlag) -> ExecutionPhaseGuard<InMemoryCollector> {
    ExecutionPhaseGuard::new(flag, InMemoryCollector::new())
}

proptest! {
    #[test]
    fn enforced_task_access_reports_once(invocation in arb_invocation(), task in arb_task()) {
        let declared = GeneratedTypeClassifier::default().unpack(&task.runtime_type).to_string();

        let guard = guard(EnforcementFlag::ENABLED);
        guard.report_project_access(&invocation, &task);
        let problems = guard.collector().drain();
        prop_assert_eq!(problems.len(), 1);
        prop_assert_eq!(problems[0].trace(), &SourceTrace::task(declared.clone(), task.path.clone()));
        prop_assert!(problems[0].message().has_reference(&invocation));

        guard.report_task_dependencies_access(&invocation, &task);
        let problems = guard.collector().drain();
        prop_assert_eq!(problems.len(), 1);
        prop_assert_eq!(problems[0].trace(), &SourceTrace::task(declared, task.path.clone()));
        prop_assert!(problems[0].message().has_reference(&invocation));
    }

    #[test]
    fn disabled_guard_never_forwards(
        invocation in arb_invocation(),
        task in arb_task(),
        capabilities in arb_capabilities(),
    ) {
        let guard = guard(EnforcementFlag::DISABLED);
        guard.report_project_access(&invocation, &task);
        guard.report_task_dependencies_access(&invocation, &task);
        guard.report_listener_registration(&capabilities, &invocation, &task.path);
        prop_assert!(guard.collector().is_empty());
    }

    #[test]
    fn listener_outcome_follows_exemption(
        invocation in arb_invocation(),
        capabilities in arb_capabilities(),
        source in "[a-z ]{1,20}",
    ) {
        let guard = guard(EnforcementFlag::ENABLED);
        guard.report_listener_registration(&capabilities, &invocation, &source);
        let problems = guard.collector().problems();

        if capabilities.is_exempt() {
            prop_assert!(problems.is_empty());
        } else {
            prop_assert_eq!(problems.len(), 1);
            prop_assert!(problems[0].trace().is_unknown());
            prop_assert!(problems[0].message().has_reference(&invocation));
        }
    }

    #[test]
    fn synthesis_is_deterministic(invocation in arb_invocation(), task in arb_task()) {
        let invocation = InvocationDescriptor::new(invocation);
        let trace = SourceTrace::task(task.runtime_type.clone(), task.path.clone());
        let owner = task.describe();

        let first = task_execution_access_problem(trace.clone(), &invocation, &owner);
        let second = task_execution_access_problem(trace, &invocation, &owner);
        prop_assert_eq!(first, second);

        let first = listener_registration_problem(SourceTrace::Unknown, &invocation, &owner);
        let second = listener_registration_problem(SourceTrace::Unknown, &invocation, &owner);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.message().is_empty());
        prop_assert!(!first.error().summary().is_empty());
    }
}
