#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteOptions {
    pub data_source: String,
}
