//! Lifecycle enumeration types.

/// Start / stop failures reported by the scheduler.
pub mod lifecycle_error;
