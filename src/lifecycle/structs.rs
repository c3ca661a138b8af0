//! Lifecycle structures.

/// Start/stop scheduler holding the registered hooks.
pub mod lifecycle;
