//! Implementation blocks for the MongoDB backend.

pub mod mongodb_backend;
pub mod mongodb_connector;
pub mod mongodb_options;
