use std::fmt;
use crate::config::enums::config_value::ConfigValue;
use crate::connector::enums::connector_engine::ConnectorEngine;

impl fmt::Display for ConnectorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorEngine::sqlite => write!(f, "sqlite"),
            ConnectorEngine::mongodb => write!(f, "mongodb"),
            ConnectorEngine::neo4j => write!(f, "neo4j"),
        }
    }
}

impl ConnectorEngine {
    pub fn log_prefix(&self) -> &'static str {
        match self {
            ConnectorEngine::sqlite => crate::sqlite::sqlite::LOG_PREFIX,
            ConnectorEngine::mongodb => crate::mongo::mongo::LOG_PREFIX,
            ConnectorEngine::neo4j => crate::neo4j::neo4j::LOG_PREFIX,
        }
    }

    /// Every option the engine recognizes, with its default.
    pub fn default_options(&self) -> Vec<(&'static str, ConfigValue)> {
        match self {
            ConnectorEngine::sqlite => crate::sqlite::sqlite::default_options(),
            ConnectorEngine::mongodb => crate::mongo::mongo::default_options(),
            ConnectorEngine::neo4j => crate::neo4j::neo4j::default_options(),
        }
    }
}
