//! Lifecycle trait definitions.

/// Start/stop callbacks driven by the scheduler.
pub mod lifecycle_hook;
