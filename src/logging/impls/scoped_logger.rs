use crate::logging::structs::scoped_logger::ScopedLogger;

impl ScopedLogger {
    pub fn new(name: &str) -> ScopedLogger {
        ScopedLogger {
            target: name.to_string(),
        }
    }

    /// Child logger whose target is `<parent>.<name>`.
    pub fn named(&self, name: &str) -> ScopedLogger {
        ScopedLogger {
            target: format!("{}.{}", self.target, name),
        }
    }

    /// Pass to the `log` macros as `target:`.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for ScopedLogger {
    fn default() -> Self {
        ScopedLogger::new(env!("CARGO_CRATE_NAME"))
    }
}
