//! Logger structures.

/// Named logger handed to each connector.
pub mod scoped_logger;
