//! Guard configuration
//!
//! The enforcement flag is decided once, at build-configuration time, and
//! handed to a guard by value. Nothing here reads ambient process state.

mod flag;
mod guard;

pub use flag::EnforcementFlag;
pub use guard::GuardConfig;
