//! Connector trait definitions.

/// Driver-facing backend contract.
pub mod connector_backend;
