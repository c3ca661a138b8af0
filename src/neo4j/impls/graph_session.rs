use std::fmt;
use std::time::Duration;
use neo4rs::{Graph, Query, Row, Txn};
use crate::connector::enums::driver_error::DriverError;
use crate::neo4j::structs::graph_session::GraphSession;

impl GraphSession {
    pub fn new(graph: Graph, database: String, max_transaction_retry_time: Duration) -> GraphSession {
        GraphSession {
            graph,
            database,
            max_transaction_retry_time,
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn max_transaction_retry_time(&self) -> Duration {
        self.max_transaction_retry_time
    }

    /// Runs `query` against the session database, discarding the rows.
    pub async fn run(&self, query: Query) -> Result<(), DriverError> {
        Ok(self.graph.run_on(self.database.as_str(), query).await?)
    }

    /// Runs `query` against the session database and collects every row
    /// it returns.
    pub async fn execute(&self, query: Query) -> Result<Vec<Row>, DriverError> {
        let mut stream = self.graph.execute_on(self.database.as_str(), query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    pub async fn start_txn(&self) -> Result<Txn, DriverError> {
        Ok(self.graph.start_txn_on(self.database.as_str()).await?)
    }

    /// Releases the session. Pooled connections go back to the driver.
    pub fn close(self) {
        drop(self);
    }
}

impl fmt::Debug for GraphSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSession")
            .field("database", &self.database)
            .field("max_transaction_retry_time", &self.max_transaction_retry_time)
            .finish()
    }
}
