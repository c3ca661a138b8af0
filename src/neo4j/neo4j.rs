use std::sync::Arc;
use std::time::Duration;
use crate::config::enums::config_value::ConfigValue;
use crate::config::structs::config_store::ConfigStore;
use crate::connector::structs::connector::Connector;
use crate::lifecycle::structs::lifecycle::Lifecycle;
use crate::logging::structs::scoped_logger::ScopedLogger;
use crate::neo4j::structs::neo4j_backend::Neo4jBackend;

pub const LOG_PREFIX: &str = "[Neo4j]";

pub const KEY_URI: &str = "uri";
pub const KEY_USERNAME: &str = "username";
pub const KEY_PASSWORD: &str = "password";
pub const KEY_DATABASE: &str = "database";
pub const KEY_MAX_CONNECTION_POOL_SIZE: &str = "maxConnectionPoolSize";
pub const KEY_CONNECTION_TIMEOUT: &str = "connectionTimeout";
pub const KEY_MAX_TRANSACTION_RETRY_TIME: &str = "maxTransactionRetryTime";
pub const KEY_ENCRYPTION: &str = "encryption";

pub const DEFAULT_URI: &str = "neo4j://localhost:7687";
pub const DEFAULT_USERNAME: &str = "neo4j";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_DATABASE: &str = "neo4j";
pub const DEFAULT_MAX_CONNECTION_POOL_SIZE: i64 = 100;
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_TRANSACTION_RETRY_TIME: Duration = Duration::from_secs(30);

/// Plain schemes and their TLS counterparts.
pub const ENCRYPTED_SCHEMES: [(&str, &str); 2] = [
    ("neo4j://", "neo4j+s://"),
    ("bolt://", "bolt+s://"),
];

pub type Neo4jConnector = Connector<Neo4jBackend>;

pub fn default_options() -> Vec<(&'static str, ConfigValue)> {
    vec![
        (KEY_URI, DEFAULT_URI.into()),
        (KEY_USERNAME, DEFAULT_USERNAME.into()),
        (KEY_PASSWORD, DEFAULT_PASSWORD.into()),
        (KEY_DATABASE, DEFAULT_DATABASE.into()),
        (KEY_MAX_CONNECTION_POOL_SIZE, DEFAULT_MAX_CONNECTION_POOL_SIZE.into()),
        (KEY_CONNECTION_TIMEOUT, DEFAULT_CONNECTION_TIMEOUT.into()),
        (KEY_MAX_TRANSACTION_RETRY_TIME, DEFAULT_MAX_TRANSACTION_RETRY_TIME.into()),
        (KEY_ENCRYPTION, false.into()),
    ]
}

pub fn register(scope: &str, lifecycle: &Lifecycle, logger: &ScopedLogger, store: Arc<ConfigStore>) -> Arc<Neo4jConnector> {
    Connector::register(Neo4jBackend, scope, lifecycle, logger, store)
}
