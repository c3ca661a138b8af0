#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedLogger {
    pub(crate) target: String,
}
