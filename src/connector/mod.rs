//! Generic connector lifecycle.
//!
//! A [`Connector`](structs::connector::Connector) owns one scope, one scoped
//! logger and at most one live driver handle. It moves between two states:
//!
//! - **Stopped**: no handle is published (before `start`, after a failed
//!   `start`, and once `stop` has begun).
//! - **Started**: the handle was opened *and* passed its connectivity check.
//!
//! Backends plug in through the
//! [`ConnectorBackend`](traits::connector_backend::ConnectorBackend) trait,
//! which only knows how to register option defaults, open, verify and close.
//! Everything else (ordering, logging, publication, cancellation) is shared.
//!
//! # Cancellation
//!
//! Driver calls run on their own task. When the caller's token fires first,
//! the connector stops waiting and returns `Cancelled`; the abandoned call
//! keeps running and a handle that arrives late is closed in the background.

/// Cancellation-aware driver call helpers.
#[allow(clippy::module_inception)]
pub mod connector;

/// Connector enumerations (engine, state, errors).
pub mod enums;

/// Implementation blocks for connector types.
pub mod impls;

/// Connector data structures.
pub mod structs;

/// Backend trait definitions.
pub mod traits;
