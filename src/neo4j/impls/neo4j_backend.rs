use std::future::Future;
use std::time::Duration;
use async_trait::async_trait;
use log::info;
use neo4rs::{ConfigBuilder, Graph};
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::enums::connector_engine::ConnectorEngine;
use crate::connector::enums::driver_error::DriverError;
use crate::connector::traits::connector_backend::ConnectorBackend;
use crate::logging::structs::scoped_logger::ScopedLogger;
use crate::neo4j::neo4j::{default_options, KEY_CONNECTION_TIMEOUT, LOG_PREFIX};
use crate::neo4j::structs::neo4j_backend::Neo4jBackend;
use crate::neo4j::structs::neo4j_options::Neo4jOptions;

#[async_trait]
impl ConnectorBackend for Neo4jBackend {
    type Handle = Graph;

    fn engine(&self) -> ConnectorEngine {
        ConnectorEngine::neo4j
    }

    fn register_defaults(&self, config: &ScopedConfig) {
        for (key, value) in default_options() {
            config.register_default(key, value);
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn open(&self, config: &ScopedConfig, logger: &ScopedLogger) -> Result<Graph, DriverError> {
        let options = Neo4jOptions::resolve(config);
        let uri = options.effective_uri();
        info!(
            target: logger.target(),
            "{} Connecting to {} as {} (database: {}, maxConnectionPoolSize: {}, connectionTimeout: {:?}, maxTransactionRetryTime: {:?})",
            LOG_PREFIX,
            uri,
            options.username,
            options.database,
            options.max_connection_pool_size,
            options.connection_timeout,
            options.max_transaction_retry_time
        );

        let driver_config = ConfigBuilder::default()
            .uri(uri)
            .user(options.username.as_str())
            .password(options.password.as_str())
            .db(options.database.as_str())
            .max_connections(options.pool_size()?)
            .build()?;
        with_timeout(options.connection_timeout, Graph::connect(driver_config)).await
    }

    /// Opens a transaction on the default database and rolls it back.
    /// Unlike `Graph::run`, this takes a pooled connection once and never
    /// goes through the driver's retry backoff.
    async fn verify(&self, config: &ScopedConfig, handle: &Graph) -> Result<(), DriverError> {
        let timeout = config.get_duration(KEY_CONNECTION_TIMEOUT);
        with_timeout(timeout, async {
            match handle.start_txn().await {
                Ok(txn) => txn.rollback().await,
                Err(error) => Err(error),
            }
        })
        .await
    }

    /// The pool closes its connections when the last clone is dropped.
    async fn close(&self, handle: Graph) -> Result<(), DriverError> {
        drop(handle);
        Ok(())
    }
}

async fn with_timeout<T, F>(after: Duration, future: F) -> Result<T, DriverError>
where
    F: Future<Output = Result<T, neo4rs::Error>>,
{
    match tokio::time::timeout(after, future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(DriverError::TimedOut { after }),
    }
}
