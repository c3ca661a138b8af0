//! Connector enumeration types.

/// Supported backend engines (sqlite, mongodb, neo4j).
pub mod connector_engine;

/// Stopped / Started.
pub mod connector_state;

/// Lifecycle errors surfaced to the scheduler.
pub mod connector_error;

/// Errors coming straight from a driver.
pub mod driver_error;
