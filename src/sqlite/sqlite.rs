use std::sync::Arc;
use crate::config::enums::config_value::ConfigValue;
use crate::config::structs::config_store::ConfigStore;
use crate::connector::structs::connector::Connector;
use crate::lifecycle::structs::lifecycle::Lifecycle;
use crate::logging::structs::scoped_logger::ScopedLogger;
use crate::sqlite::structs::sqlite_backend::SqliteBackend;

pub const LOG_PREFIX: &str = "[SQLite]";

pub const KEY_DATA_SOURCE: &str = "dataSource";

pub const DEFAULT_DATA_SOURCE: &str = "sqlite::memory:?mode=rwc";

pub type SqliteConnector = Connector<SqliteBackend>;

pub fn default_options() -> Vec<(&'static str, ConfigValue)> {
    vec![(KEY_DATA_SOURCE, DEFAULT_DATA_SOURCE.into())]
}

pub fn register(scope: &str, lifecycle: &Lifecycle, logger: &ScopedLogger, store: Arc<ConfigStore>) -> Arc<SqliteConnector> {
    Connector::register(SqliteBackend, scope, lifecycle, logger, store)
}
