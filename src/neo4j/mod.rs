//! Graph backend on Neo4j, through `neo4rs`.
//!
//! The published handle is a `neo4rs::Graph`, which owns the connection
//! pool. Consumers that need a database other than the configured default
//! go through `get_session`, which binds a `GraphSession` to a database name
//! without touching the server; an unknown name only fails on first query.

#[allow(clippy::module_inception)]
pub mod neo4j;

/// Neo4j connector structures.
pub mod structs;

/// Implementation blocks for the Neo4j backend.
pub mod impls;
