/// Options of one document scope, as resolved at start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoDbOptions {
    pub host: String,
    /// Kept wide so an out of range value is reported instead of wrapped.
    pub port: i64,
    pub db: String,
    pub user: String,
    pub password: String,
    pub auth_mechanism: String,
    pub read_preference: String,
    pub ssl_mode: bool,
}
