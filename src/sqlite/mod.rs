//! Relational (embedded) backend on SQLite.
//!
//! The handle is a `sqlx` pool. The only option is the data source, which
//! defaults to a private in-memory database opened read-write.
//!
//! | Key          | Default                     |
//! |--------------|-----------------------------|
//! | `dataSource` | `sqlite::memory:?mode=rwc`  |

#[allow(clippy::module_inception)]
pub mod sqlite;

/// SQLite connector structures.
pub mod structs;

/// Implementation blocks for the SQLite backend.
pub mod impls;
