use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use tokio_util::sync::CancellationToken;
use store_connectors::config::structs::configuration::Configuration;
use store_connectors::connector::enums::connector_engine::ConnectorEngine;
use store_connectors::lifecycle::enums::lifecycle_error::LifecycleError;
use store_connectors::lifecycle::structs::lifecycle::Lifecycle;
use store_connectors::logging::logging::setup_logging;
use store_connectors::logging::structs::scoped_logger::ScopedLogger;
use store_connectors::structs::Cli;
use store_connectors::{mongo, neo4j, sqlite};

const STOP_GRACE_PERIOD: Duration = Duration::from_secs(30);

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    let level = match config.log_level_filter() {
        Ok(level) => level,
        Err(_) => exit(101)
    };
    if let Err(error) = setup_logging(level) {
        eprintln!("Failed to initialize logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store = Arc::new(config.config_store());
            let lifecycle = Lifecycle::new();
            let logger = ScopedLogger::default();

            for connector in config.enabled_connectors() {
                info!("[BOOT] Registering {} connector '{}'", connector.engine, connector.scope);
                match connector.engine {
                    ConnectorEngine::sqlite => {
                        sqlite::sqlite::register(&connector.scope, &lifecycle, &logger, store.clone());
                    }
                    ConnectorEngine::mongodb => {
                        mongo::mongo::register(&connector.scope, &lifecycle, &logger, store.clone());
                    }
                    ConnectorEngine::neo4j => {
                        neo4j::neo4j::register(&connector.scope, &lifecycle, &logger, store.clone());
                    }
                }
            }
            if lifecycle.is_empty() {
                warn!("[BOOT] No connector is enabled in {}", args.config);
            }

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown signal handler");
                    exit(1);
                }
            };

            let boot_token = CancellationToken::new();
            let boot_handler = tokio_shutdown.clone();
            let boot_canceller = boot_token.clone();
            let boot_watcher = tokio::spawn(async move {
                boot_handler.handle().await;
                info!("[BOOT] Shutdown requested while starting, cancelling...");
                boot_canceller.cancel();
            });

            let started = lifecycle.start(&boot_token).await;
            boot_watcher.abort();
            if let Err(error) = started {
                error!("[BOOT] {error}");
                stop_all(&lifecycle).await;
                exit(1);
            }

            if args.check {
                info!("[CHECK] All {} connector(s) verified", lifecycle.len());
            } else {
                info!("[BOOT] {} connector(s) started, waiting for shutdown signal...", lifecycle.len());
                tokio_shutdown.handle().await;
                info!("Shutdown request received, shutting down...");
            }

            if !stop_all(&lifecycle).await {
                exit(1);
            }
            info!("Server shutting down completed");
            Ok(())
        })
}

async fn stop_all(lifecycle: &Lifecycle) -> bool
{
    match lifecycle.stop_within(STOP_GRACE_PERIOD).await {
        Ok(()) => true,
        Err(LifecycleError::StopFailed { failures }) => {
            for (hook, failure) in failures {
                error!("[SHUTDOWN] {hook}: {failure}");
            }
            false
        }
        Err(error) => {
            error!("[SHUTDOWN] {error}");
            false
        }
    }
}
