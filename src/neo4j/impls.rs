//! Implementation blocks for the Neo4j backend.

pub mod graph_session;
pub mod neo4j_backend;
pub mod neo4j_connector;
pub mod neo4j_options;
