use std::sync::Arc;
use tokio::sync::Mutex;
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::structs::handle_slot::HandleSlot;
use crate::connector::traits::connector_backend::ConnectorBackend;
use crate::logging::structs::scoped_logger::ScopedLogger;

pub struct Connector<B: ConnectorBackend> {
    pub(crate) config: ScopedConfig,
    pub(crate) logger: ScopedLogger,
    pub(crate) backend: Arc<B>,
    pub(crate) handle: HandleSlot<B::Handle>,
    /// Serializes `start` and `stop` on this connector.
    pub(crate) transition: Mutex<()>,
}
