use std::time::Duration;
use neo4rs::Graph;

/// A unit of work bound to one database. Created per call to
/// `get_session` and owned by the caller.
#[derive(Clone)]
pub struct GraphSession {
    pub(crate) graph: Graph,
    pub(crate) database: String,
    pub(crate) max_transaction_retry_time: Duration,
}
