use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use crate::lifecycle::enums::lifecycle_error::LifecycleError;
use crate::lifecycle::structs::lifecycle::Lifecycle;
use crate::lifecycle::traits::lifecycle_hook::LifecycleHook;

const LOG_PREFIX: &str = "[LIFECYCLE]";

pub const DEFAULT_ROLLBACK_GRACE_PERIOD: Duration = Duration::from_secs(30);

impl Default for Lifecycle {
    fn default() -> Lifecycle {
        Lifecycle {
            hooks: Default::default(),
            rollback_grace_period: DEFAULT_ROLLBACK_GRACE_PERIOD,
        }
    }
}

impl Lifecycle {
    pub fn new() -> Lifecycle {
        Lifecycle::default()
    }

    /// How long a failed `start` waits for the already started hooks to stop
    /// before it abandons them.
    pub fn with_rollback_grace_period(mut self, grace_period: Duration) -> Lifecycle {
        self.rollback_grace_period = grace_period;
        self
    }

    pub fn append(&self, hook: Arc<dyn LifecycleHook>) {
        self.hooks.lock().push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.lock().is_empty()
    }

    pub fn hook_names(&self) -> Vec<String> {
        self.hooks.lock().iter().map(|hook| hook.name()).collect()
    }

    fn snapshot(&self) -> Vec<Arc<dyn LifecycleHook>> {
        self.hooks.lock().clone()
    }

    /// Starts every hook in registration order. On the first failure the
    /// hooks that already started are stopped again, newest first, and the
    /// failure is returned.
    ///
    /// The rollback never sees `token`. It runs under its own token, which
    /// fires after the rollback grace period.
    pub async fn start(&self, token: &CancellationToken) -> Result<(), LifecycleError> {
        let hooks = self.snapshot();
        info!("{LOG_PREFIX} Starting {} hook(s)", hooks.len());

        for (index, hook) in hooks.iter().enumerate() {
            info!("{LOG_PREFIX} Starting {}", hook.name());
            if let Err(source) = hook.on_start(token).await {
                error!("{LOG_PREFIX} {} failed to start: {source}", hook.name());
                self.rollback(&hooks[..index]).await;
                return Err(LifecycleError::StartFailed {
                    hook: hook.name(),
                    source,
                });
            }
        }
        Ok(())
    }

    async fn rollback(&self, started: &[Arc<dyn LifecycleHook>]) {
        let (token, deadline) = deadline_token(self.rollback_grace_period);
        for hook in started.iter().rev() {
            info!("{LOG_PREFIX} Rolling back {}", hook.name());
            if let Err(error) = hook.on_stop(&token).await {
                warn!("{LOG_PREFIX} Rollback of {} failed: {error}", hook.name());
            }
        }
        deadline.abort();
    }

    /// Stops every hook, newest first. A failing hook does not keep the
    /// others from stopping; all failures are reported together.
    pub async fn stop(&self, token: &CancellationToken) -> Result<(), LifecycleError> {
        let hooks = self.snapshot();
        info!("{LOG_PREFIX} Stopping {} hook(s)", hooks.len());

        let mut failures = Vec::new();
        for hook in hooks.iter().rev() {
            if let Err(error) = hook.on_stop(token).await {
                error!("{LOG_PREFIX} {} failed to stop: {error}", hook.name());
                failures.push((hook.name(), error));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LifecycleError::StopFailed { failures })
        }
    }

    /// `stop` under a token that fires once `grace_period` has passed.
    pub async fn stop_within(&self, grace_period: Duration) -> Result<(), LifecycleError> {
        let (token, deadline) = deadline_token(grace_period);
        let result = self.stop(&token).await;
        deadline.abort();
        result
    }
}

fn deadline_token(after: Duration) -> (CancellationToken, JoinHandle<()>) {
    let token = CancellationToken::new();
    let deadline = token.clone();
    let timer = tokio::spawn(async move {
        tokio::time::sleep(after).await;
        warn!("{LOG_PREFIX} Hooks did not stop within {after:?}, abandoning");
        deadline.cancel();
    });
    (token, timer)
}
