use neo4rs::Graph;
use crate::connector::enums::connector_error::ConnectorError;
use crate::connector::structs::connector::Connector;
use crate::neo4j::neo4j::{KEY_DATABASE, KEY_MAX_TRANSACTION_RETRY_TIME};
use crate::neo4j::structs::graph_session::GraphSession;
use crate::neo4j::structs::neo4j_backend::Neo4jBackend;

impl Connector<Neo4jBackend> {
    pub fn get_driver(&self) -> Option<Graph> {
        self.get_handle()
    }

    /// `database` when given and non-empty, else the configured default as
    /// it reads right now.
    pub fn session_database(&self, database: Option<&str>) -> String {
        match database {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.config().get_string(KEY_DATABASE),
        }
    }

    pub fn get_session(&self, database: Option<&str>) -> Result<GraphSession, ConnectorError> {
        let graph = self.get_driver().ok_or_else(|| ConnectorError::NotStarted {
            scope: self.scope().to_string(),
        })?;
        Ok(GraphSession::new(
            graph,
            self.session_database(database),
            self.config().get_duration(KEY_MAX_TRANSACTION_RETRY_TIME),
        ))
    }
}
