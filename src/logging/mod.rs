//! Logging setup and per-scope loggers.
//!
//! Connectors log through the `log` facade. Each connector carries its own
//! [`ScopedLogger`](structs::scoped_logger::ScopedLogger) whose target is the
//! root name followed by the connector scope, so log lines of sibling
//! connectors can be told (and filtered) apart. The binary installs a `fern`
//! dispatcher with colored levels and timestamps.

/// Dispatcher installation.
#[allow(clippy::module_inception)]
pub mod logging;

/// Logger data structures.
pub mod structs;

/// Implementation blocks for loggers.
pub mod impls;
