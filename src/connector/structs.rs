//! Connector structures.

/// Generic connector over a backend.
pub mod connector;

/// Publication slot for the verified handle.
pub mod handle_slot;
