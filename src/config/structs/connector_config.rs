use serde::{Deserialize, Serialize};
use crate::connector::enums::connector_engine::ConnectorEngine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    pub scope: String,
    pub engine: ConnectorEngine,
    #[serde(default = "ConnectorConfig::enabled_by_default")]
    pub enabled: bool,
}
