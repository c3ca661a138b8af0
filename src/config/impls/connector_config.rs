use crate::config::structs::connector_config::ConnectorConfig;
use crate::connector::enums::connector_engine::ConnectorEngine;

impl ConnectorConfig {
    pub fn new(scope: &str, engine: ConnectorEngine) -> ConnectorConfig {
        ConnectorConfig {
            scope: scope.to_string(),
            engine,
            enabled: true,
        }
    }

    pub(crate) fn enabled_by_default() -> bool {
        true
    }
}
