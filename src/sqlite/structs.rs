//! SQLite connector structures.

pub mod sqlite_backend;

pub mod sqlite_options;
