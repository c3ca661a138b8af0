//! Implementation blocks for connector types.

pub mod connector;
pub mod connector_engine;
pub mod connector_error;
pub mod connector_state;
pub mod handle_slot;
