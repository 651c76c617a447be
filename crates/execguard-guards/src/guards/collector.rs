//! Reference collectors
//!
//! Hosts normally bring their own problem-reporting pipeline; these cover the
//! common in-process cases and tests.

use super::traits::ProblemCollector;
use execguard_core::ProblemRecord;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

/// Append-only, thread-safe sink.
#[derive(Debug, Default)]
pub struct InMemoryCollector {
    problems: Mutex<Vec<ProblemRecord>>,
}

impl InMemoryCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything submitted so far, in submission order.
    pub fn problems(&self) -> Vec<ProblemRecord> {
        self.problems.lock().clone()
    }

    /// Number of problems held.
    pub fn len(&self) -> usize {
        self.problems.lock().len()
    }

    /// Returns `true` if nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.problems.lock().is_empty()
    }

    /// Take all held problems, leaving the collector empty.
    pub fn drain(&self) -> Vec<ProblemRecord> {
        std::mem::take(&mut *self.problems.lock())
    }
}

impl ProblemCollector for InMemoryCollector {
    fn submit(&self, problem: ProblemRecord) {
        self.problems.lock().push(problem);
    }
}

/// Logs every problem as a `warn` event, then forwards it if an inner
/// collector is configured.
#[derive(Default)]
pub struct TracingCollector {
    inner: Option<Arc<dyn ProblemCollector>>,
}

impl TracingCollector {
    /// Log-only collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log, then forward to `inner`.
    pub fn forwarding_to(inner: Arc<dyn ProblemCollector>) -> Self {
        Self { inner: Some(inner) }
    }
}

impl ProblemCollector for TracingCollector {
    fn submit(&self, problem: ProblemRecord) {
        warn!(
            trace = %problem.trace(),
            message = %problem.message(),
            error = %problem.error(),
            "Execution-phase problem"
        );
        if let Some(inner) = &self.inner {
            inner.submit(problem);
        }
    }
}

impl std::fmt::Debug for TracingCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingCollector")
            .field("forwarding", &self.inner.is_some())
            .finish()
    }
}
