//! Neo4j connector structures.

pub mod graph_session;

pub mod neo4j_backend;

pub mod neo4j_options;
