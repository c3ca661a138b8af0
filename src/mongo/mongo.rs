use std::sync::Arc;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use crate::config::enums::config_value::ConfigValue;
use crate::config::structs::config_store::ConfigStore;
use crate::connector::structs::connector::Connector;
use crate::lifecycle::structs::lifecycle::Lifecycle;
use crate::logging::structs::scoped_logger::ScopedLogger;
use crate::mongo::structs::mongodb_backend::MongoDbBackend;

pub const LOG_PREFIX: &str = "[MongoDB]";

pub const URI_SCHEME: &str = "mongodb://";
pub const REDACTED_PASSWORD: &str = "*****";

pub const KEY_HOST: &str = "host";
pub const KEY_PORT: &str = "port";
pub const KEY_DB: &str = "db";
pub const KEY_USER: &str = "user";
pub const KEY_PASSWORD: &str = "password";
pub const KEY_AUTH_MECHANISM: &str = "authMechanism";
pub const KEY_READ_PREFERENCE: &str = "readPreference";
pub const KEY_SSL_MODE: &str = "sslmode";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 27017;

/// Userinfo is encoded down to the RFC 3986 unreserved set.
pub const USERINFO_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub type MongoDbConnector = Connector<MongoDbBackend>;

pub fn default_options() -> Vec<(&'static str, ConfigValue)> {
    vec![
        (KEY_HOST, DEFAULT_HOST.into()),
        (KEY_PORT, DEFAULT_PORT.into()),
        (KEY_DB, "".into()),
        (KEY_USER, "".into()),
        (KEY_PASSWORD, "".into()),
        (KEY_AUTH_MECHANISM, "".into()),
        (KEY_READ_PREFERENCE, "".into()),
        (KEY_SSL_MODE, false.into()),
    ]
}

pub fn register(scope: &str, lifecycle: &Lifecycle, logger: &ScopedLogger, store: Arc<ConfigStore>) -> Arc<MongoDbConnector> {
    Connector::register(MongoDbBackend, scope, lifecycle, logger, store)
}
