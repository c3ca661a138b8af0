//! Implementation blocks for the SQLite backend.

pub mod sqlite_backend;
pub mod sqlite_connector;
pub mod sqlite_options;
