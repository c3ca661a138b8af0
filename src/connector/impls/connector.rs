use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use crate::config::structs::config_store::ConfigStore;
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::connector::run_abandonable;
use crate::connector::enums::connector_engine::ConnectorEngine;
use crate::connector::enums::connector_error::ConnectorError;
use crate::connector::enums::connector_state::ConnectorState;
use crate::connector::structs::connector::Connector;
use crate::connector::structs::handle_slot::HandleSlot;
use crate::connector::traits::connector_backend::ConnectorBackend;
use crate::lifecycle::structs::lifecycle::Lifecycle;
use crate::lifecycle::traits::lifecycle_hook::{HookError, LifecycleHook};
use crate::logging::structs::scoped_logger::ScopedLogger;

impl<B: ConnectorBackend> Connector<B> {
    /// Builds the connector and registers the backend's option defaults
    /// under `scope`. Nothing is opened until `start`.
    pub fn new(backend: B, scope: &str, logger: &ScopedLogger, store: Arc<ConfigStore>) -> Connector<B> {
        let config = ScopedConfig::new(scope, store);
        backend.register_defaults(&config);
        Connector {
            config,
            logger: logger.named(scope),
            backend: Arc::new(backend),
            handle: HandleSlot::new(),
            transition: Mutex::new(()),
        }
    }

    /// Builds the connector and appends it to `lifecycle`, which will call
    /// `start` and `stop` at the application's start and stop events.
    pub fn register(
        backend: B,
        scope: &str,
        lifecycle: &Lifecycle,
        logger: &ScopedLogger,
        store: Arc<ConfigStore>,
    ) -> Arc<Connector<B>> {
        let connector = Arc::new(Connector::new(backend, scope, logger, store));
        lifecycle.append(connector.clone());
        connector
    }

    pub fn scope(&self) -> &str {
        self.config.scope()
    }

    pub fn config(&self) -> &ScopedConfig {
        &self.config
    }

    pub fn logger(&self) -> &ScopedLogger {
        &self.logger
    }

    pub fn engine(&self) -> ConnectorEngine {
        self.backend.engine()
    }

    pub fn state(&self) -> ConnectorState {
        if self.handle.is_published() {
            ConnectorState::Started
        } else {
            ConnectorState::Stopped
        }
    }

    pub fn is_started(&self) -> bool {
        self.state().is_started()
    }

    /// The verified handle, or `None` before `start` succeeded and once
    /// `stop` began. Nothing prevents a concurrent `stop` from closing the
    /// connection behind a handle obtained here.
    pub fn get_handle(&self) -> Option<B::Handle> {
        self.handle.get()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(scope = %self.config.scope))]
    pub async fn start(&self, token: &CancellationToken) -> Result<(), ConnectorError> {
        let _transition = self.transition.lock().await;
        let prefix = self.engine().log_prefix();

        if self.handle.is_published() {
            warn!(target: self.logger.target(), "{prefix} Connector already started, ignoring start");
            return Ok(());
        }
        info!(target: self.logger.target(), "{prefix} Starting connector");

        let handle = match self.open(token).await {
            Ok(handle) => handle,
            Err(error) => {
                error!(target: self.logger.target(), "{prefix} {error}");
                return Err(error);
            }
        };

        if let Err(error) = self.verify(token, &handle).await {
            error!(target: self.logger.target(), "{prefix} {error}");
            if token.is_cancelled() {
                let backend = self.backend.clone();
                let logger = self.logger.clone();
                tokio::spawn(async move {
                    close_quietly(backend.as_ref(), &logger, handle).await;
                });
            } else {
                close_quietly(self.backend.as_ref(), &self.logger, handle).await;
            }
            return Err(error);
        }

        self.handle.publish(handle);
        info!(target: self.logger.target(), "{prefix} Connector started");
        Ok(())
    }

    /// Unpublishes the handle, then closes it. A connector that never
    /// started is left as is and `Ok(())` is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(scope = %self.config.scope))]
    pub async fn stop(&self, token: &CancellationToken) -> Result<(), ConnectorError> {
        let _transition = self.transition.lock().await;
        let prefix = self.engine().log_prefix();

        let Some(handle) = self.handle.take() else {
            debug!(target: self.logger.target(), "{prefix} Connector not started, nothing to stop");
            return Ok(());
        };
        info!(target: self.logger.target(), "{prefix} Stopping connector");

        let backend = self.backend.clone();
        let scope = self.config.scope.clone();
        match run_abandonable(token, async move { backend.close(handle).await }, |()| async {}).await {
            Some(Ok(())) => {
                info!(target: self.logger.target(), "{prefix} Connector stopped");
                Ok(())
            }
            Some(Err(source)) => {
                let error = ConnectorError::Close { scope, source };
                error!(target: self.logger.target(), "{prefix} {error}");
                Err(error)
            }
            None => {
                warn!(target: self.logger.target(), "{prefix} Stop cancelled, the connection is closed in the background");
                Err(ConnectorError::Cancelled { scope, phase: "closing" })
            }
        }
    }

    async fn open(&self, token: &CancellationToken) -> Result<B::Handle, ConnectorError> {
        let scope = self.config.scope.clone();
        if token.is_cancelled() {
            return Err(ConnectorError::Cancelled { scope, phase: "opening" });
        }
        let backend = self.backend.clone();
        let config = self.config.clone();
        let logger = self.logger.clone();
        let cleanup_backend = self.backend.clone();
        let cleanup_logger = self.logger.clone();

        let outcome = run_abandonable(
            token,
            async move { backend.open(&config, &logger).await },
            move |handle| async move {
                debug!(target: cleanup_logger.target(), "Closing connection opened after cancellation");
                close_quietly(cleanup_backend.as_ref(), &cleanup_logger, handle).await;
            },
        )
        .await;

        match outcome {
            Some(result) => result.map_err(|source| ConnectorError::Open { scope, source }),
            None => Err(ConnectorError::Cancelled { scope, phase: "opening" }),
        }
    }

    async fn verify(&self, token: &CancellationToken, handle: &B::Handle) -> Result<(), ConnectorError> {
        let scope = self.config.scope.clone();
        let backend = self.backend.clone();
        let config = self.config.clone();
        let probe = handle.clone();

        let outcome = run_abandonable(
            token,
            async move { backend.verify(&config, &probe).await },
            |()| async {},
        )
        .await;

        match outcome {
            Some(result) => result.map_err(|source| ConnectorError::Verify { scope, source }),
            None => Err(ConnectorError::Cancelled { scope, phase: "verifying" }),
        }
    }
}

async fn close_quietly<B: ConnectorBackend>(backend: &B, logger: &ScopedLogger, handle: B::Handle) {
    if let Err(error) = backend.close(handle).await {
        warn!(target: logger.target(), "{} Unable to close discarded connection: {error}", backend.engine().log_prefix());
    }
}

#[async_trait]
impl<B: ConnectorBackend> LifecycleHook for Connector<B> {
    fn name(&self) -> String {
        format!("{}:{}", self.engine(), self.config.scope)
    }

    async fn on_start(&self, token: &CancellationToken) -> Result<(), HookError> {
        Ok(self.start(token).await?)
    }

    async fn on_stop(&self, token: &CancellationToken) -> Result<(), HookError> {
        Ok(self.stop(token).await?)
    }
}

impl<B: ConnectorBackend> fmt::Debug for Connector<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("engine", &self.engine())
            .field("scope", &self.config.scope)
            .field("state", &self.state())
            .finish()
    }
}
