use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neo4jOptions {
    pub uri: String,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connection_pool_size: i64,
    pub connection_timeout: Duration,
    pub max_transaction_retry_time: Duration,
    pub encryption: bool,
}
