use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Connection, Pool, Sqlite};
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::enums::connector_engine::ConnectorEngine;
use crate::connector::enums::driver_error::DriverError;
use crate::connector::traits::connector_backend::ConnectorBackend;
use crate::logging::structs::scoped_logger::ScopedLogger;
use crate::sqlite::sqlite::{default_options, LOG_PREFIX};
use crate::sqlite::structs::sqlite_backend::SqliteBackend;
use crate::sqlite::structs::sqlite_options::SqliteOptions;

#[async_trait]
impl ConnectorBackend for SqliteBackend {
    type Handle = Pool<Sqlite>;

    fn engine(&self) -> ConnectorEngine {
        ConnectorEngine::sqlite
    }

    fn register_defaults(&self, config: &ScopedConfig) {
        for (key, value) in default_options() {
            config.register_default(key, value);
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn open(&self, config: &ScopedConfig, logger: &ScopedLogger) -> Result<Pool<Sqlite>, DriverError> {
        let options = SqliteOptions::resolve(config);
        info!(target: logger.target(), "{} Opening data source {}", LOG_PREFIX, options.data_source);

        let connect_options = SqliteConnectOptions::from_str(&options.data_source)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        Ok(SqlitePoolOptions::new().connect_with(connect_options).await?)
    }

    async fn verify(&self, _config: &ScopedConfig, handle: &Pool<Sqlite>) -> Result<(), DriverError> {
        let mut connection = handle.acquire().await?;
        connection.ping().await?;
        Ok(())
    }

    async fn close(&self, handle: Pool<Sqlite>) -> Result<(), DriverError> {
        handle.close().await;
        Ok(())
    }
}
