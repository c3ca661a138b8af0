use std::sync::Arc;
use crate::config::structs::config_store::ConfigStore;

#[derive(Debug, Clone)]
pub struct ScopedConfig {
    pub(crate) scope: String,
    pub(crate) store: Arc<ConfigStore>,
}
