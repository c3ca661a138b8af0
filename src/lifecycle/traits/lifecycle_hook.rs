use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Failure reported by a hook. Connectors report their `ConnectorError`.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
pub trait LifecycleHook: Send + Sync {
    fn name(&self) -> String;

    async fn on_start(&self, token: &CancellationToken) -> Result<(), HookError>;

    /// Must succeed on a hook whose `on_start` never ran or failed.
    async fn on_stop(&self, token: &CancellationToken) -> Result<(), HookError>;
}
