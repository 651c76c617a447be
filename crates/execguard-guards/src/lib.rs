#![deny(clippy::await_holding_lock)]
//! # Execguard Guards - Execution-Phase Enforcement
//!
//! Turns API use that is disallowed while tasks execute into structured
//! [`ProblemRecord`](execguard_core::ProblemRecord)s instead of failing the
//! triggering call. Hosts call the [`ViolationHooks`] entry points from their
//! interception points; the guard decides whether to report, synthesizes the
//! record, and hands it to a [`ProblemCollector`].

pub mod guards;
pub mod prelude;

pub use guards::*;
