use thiserror::Error;
use crate::lifecycle::traits::lifecycle_hook::HookError;

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Start of '{hook}' failed: {source}")]
    StartFailed {
        hook: String,
        #[source]
        source: HookError,
    },

    #[error("{} hook(s) failed to stop", .failures.len())]
    StopFailed {
        failures: Vec<(String, HookError)>,
    },
}
