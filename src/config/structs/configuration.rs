use serde::{Deserialize, Serialize};
use crate::config::structs::connector_config::ConnectorConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_prefix: Option<String>,
    #[serde(default)]
    pub connectors: Vec<ConnectorConfig>,
    /// Every other table, keyed by scope, e.g. `[relational] dataSource = ".."`.
    #[serde(flatten)]
    pub settings: toml::Table,
}
