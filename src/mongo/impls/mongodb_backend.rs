use async_trait::async_trait;
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::enums::connector_engine::ConnectorEngine;
use crate::connector::enums::driver_error::DriverError;
use crate::connector::traits::connector_backend::ConnectorBackend;
use crate::logging::structs::scoped_logger::ScopedLogger;
use crate::mongo::mongo::{default_options, LOG_PREFIX};
use crate::mongo::structs::mongodb_backend::MongoDbBackend;
use crate::mongo::structs::mongodb_options::MongoDbOptions;

#[async_trait]
impl ConnectorBackend for MongoDbBackend {
    type Handle = Client;

    fn engine(&self) -> ConnectorEngine {
        ConnectorEngine::mongodb
    }

    fn register_defaults(&self, config: &ScopedConfig) {
        for (key, value) in default_options() {
            config.register_default(key, value);
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn open(&self, config: &ScopedConfig, logger: &ScopedLogger) -> Result<Client, DriverError> {
        let options = MongoDbOptions::resolve(config);
        let uri = options.connection_uri()?;
        info!(target: logger.target(), "{} Connecting with {}", LOG_PREFIX, options.redacted_uri()?);
        Ok(Client::with_uri_str(&uri).await?)
    }

    /// The client connects lazily, so the ping is the first server round trip.
    async fn verify(&self, _config: &ScopedConfig, handle: &Client) -> Result<(), DriverError> {
        handle.database("admin").run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self, handle: Client) -> Result<(), DriverError> {
        handle.shutdown().await;
        Ok(())
    }
}
