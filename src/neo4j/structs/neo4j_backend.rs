#[derive(Debug, Clone, Copy, Default)]
pub struct Neo4jBackend;
