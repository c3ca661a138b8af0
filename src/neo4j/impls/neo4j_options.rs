use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::enums::driver_error::DriverError;
use crate::neo4j::neo4j::{ENCRYPTED_SCHEMES, KEY_CONNECTION_TIMEOUT, KEY_DATABASE, KEY_ENCRYPTION, KEY_MAX_CONNECTION_POOL_SIZE, KEY_MAX_TRANSACTION_RETRY_TIME, KEY_PASSWORD, KEY_URI, KEY_USERNAME};
use crate::neo4j::structs::neo4j_options::Neo4jOptions;

impl Neo4jOptions {
    pub fn resolve(config: &ScopedConfig) -> Neo4jOptions {
        Neo4jOptions {
            uri: config.get_string(KEY_URI),
            username: config.get_string(KEY_USERNAME),
            password: config.get_string(KEY_PASSWORD),
            database: config.get_string(KEY_DATABASE),
            max_connection_pool_size: config.get_int(KEY_MAX_CONNECTION_POOL_SIZE),
            connection_timeout: config.get_duration(KEY_CONNECTION_TIMEOUT),
            max_transaction_retry_time: config.get_duration(KEY_MAX_TRANSACTION_RETRY_TIME),
            encryption: config.get_bool(KEY_ENCRYPTION),
        }
    }

    /// The configured URI, moved to the `+s` scheme when encryption is on.
    /// Schemes that already pick their own trust settings are left alone.
    pub fn effective_uri(&self) -> String {
        if !self.encryption {
            return self.uri.clone();
        }
        for (plain, encrypted) in ENCRYPTED_SCHEMES {
            if let Some(rest) = self.uri.strip_prefix(plain) {
                return format!("{encrypted}{rest}");
            }
        }
        self.uri.clone()
    }

    pub fn pool_size(&self) -> Result<usize, DriverError> {
        match usize::try_from(self.max_connection_pool_size) {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(DriverError::InvalidTarget(format!(
                "maxConnectionPoolSize must be positive, got {}",
                self.max_connection_pool_size
            ))),
        }
    }
}
