use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),

    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),

    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),

    #[error("Driver task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Timed out after {after:?}")]
    TimedOut { after: Duration },

    #[error("Invalid connection target: {0}")]
    InvalidTarget(String),

    #[error("{0}")]
    Other(String),
}
