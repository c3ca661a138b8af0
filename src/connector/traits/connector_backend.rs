use async_trait::async_trait;
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::enums::connector_engine::ConnectorEngine;
use crate::connector::enums::driver_error::DriverError;
use crate::logging::structs::scoped_logger::ScopedLogger;

/// What a backend has to provide to be driven by a `Connector`.
///
/// Implementations resolve their own options from `config` on every call;
/// they never keep a handle themselves.
#[async_trait]
pub trait ConnectorBackend: Send + Sync + 'static {
    /// Driver object published to consumers. Clones must share the
    /// underlying connection.
    type Handle: Clone + Send + Sync + 'static;

    fn engine(&self) -> ConnectorEngine;

    /// Called once at construction, before any option is read.
    fn register_defaults(&self, config: &ScopedConfig);

    async fn open(&self, config: &ScopedConfig, logger: &ScopedLogger) -> Result<Self::Handle, DriverError>;

    /// A single round trip, no retry.
    async fn verify(&self, config: &ScopedConfig, handle: &Self::Handle) -> Result<(), DriverError>;

    async fn close(&self, handle: Self::Handle) -> Result<(), DriverError>;
}
