//! Shared fixtures for guard integration tests

#![allow(dead_code)]

use execguard_guards::prelude::*;
use std::fmt;

/// Task fixture with a fixed path and runtime type.
#[derive(Debug, Clone)]
pub struct TestTask {
    pub path: String,
    pub runtime_type: String,
}

impl TestTask {
    pub fn new(runtime_type: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            runtime_type: runtime_type.into(),
        }
    }
}

impl TaskHandle for TestTask {
    fn path(&self) -> &str {
        &self.path
    }

    fn runtime_type(&self) -> &str {
        &self.runtime_type
    }
}

/// Registration source fixture.
pub struct TestProject(pub &'static str);

impl fmt::Display for TestProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project '{}'", self.0)
    }
}

pub fn enforcing_guard() -> ExecutionPhaseGuard<InMemoryCollector> {
    ExecutionPhaseGuard::new(EnforcementFlag::ENABLED, InMemoryCollector::new())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
