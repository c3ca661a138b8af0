mod common;

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;
use sqlx::{Pool, Sqlite};
use tokio_util::sync::CancellationToken;
use store_connectors::connector::enums::connector_error::ConnectorError;
use store_connectors::lifecycle::enums::lifecycle_error::LifecycleError;
use store_connectors::lifecycle::structs::lifecycle::Lifecycle;
use store_connectors::lifecycle::traits::lifecycle_hook::{HookError, LifecycleHook};
use store_connectors::sqlite::sqlite::SqliteConnector;
use store_connectors::logging::structs::scoped_logger::ScopedLogger;
use store_connectors::{mongo, neo4j, sqlite};

#[tokio::test]
async fn test_registration_is_side_effect_free() {
    let store = common::create_test_store();
    common::unreachable_mongo(&store, "document");
    common::unreachable_neo4j(&store, "graph");
    let lifecycle = Lifecycle::new();
    let logger = ScopedLogger::default();

    let relational = sqlite::sqlite::register("relational", &lifecycle, &logger, store.clone());
    let document = mongo::mongo::register("document", &lifecycle, &logger, store.clone());
    let graph = neo4j::neo4j::register("graph", &lifecycle, &logger, store);

    assert_eq!(
        lifecycle.hook_names(),
        vec!["sqlite:relational".to_string(), "mongodb:document".to_string(), "neo4j:graph".to_string()]
    );
    assert!(!relational.is_started());
    assert!(!document.is_started());
    assert!(!graph.is_started());
}

#[tokio::test]
async fn test_failed_backend_rolls_back_earlier_ones() {
    let store = common::create_test_store();
    common::unreachable_mongo(&store, "document");
    let lifecycle = Lifecycle::new();
    let logger = ScopedLogger::default();
    let relational = sqlite::sqlite::register("relational", &lifecycle, &logger, store.clone());
    let document = mongo::mongo::register("document", &lifecycle, &logger, store);

    let token = common::cancel_after(Duration::from_secs(2));
    match lifecycle.start(&token).await {
        Err(LifecycleError::StartFailed { hook, source }) => {
            assert_eq!(hook, "mongodb:document");
            let source = source.downcast_ref::<ConnectorError>().expect("connector error");
            assert!(source.is_cancelled());
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(relational.get_db().is_none(), "Relational connector should be rolled back");
    assert!(document.get_client().is_none());

    lifecycle.stop(&CancellationToken::new()).await.unwrap();
}

#[tokio::test]
async fn test_stop_without_start_is_ok() {
    let lifecycle = Lifecycle::new();
    let logger = ScopedLogger::default();
    let store = common::create_test_store();
    sqlite::sqlite::register("relational", &lifecycle, &logger, store.clone());
    neo4j::neo4j::register("graph", &lifecycle, &logger, store);

    lifecycle.stop(&CancellationToken::new()).await.unwrap();
}

/// Keeps the pool of an earlier connector, then fires the boot token and
/// fails, as a shutdown signal arriving mid-boot would.
struct InterruptedBoot {
    relational: Arc<SqliteConnector>,
    seen: Mutex<Option<Pool<Sqlite>>>,
}

#[async_trait]
impl LifecycleHook for InterruptedBoot {
    fn name(&self) -> String {
        String::from("interrupted")
    }

    async fn on_start(&self, token: &CancellationToken) -> Result<(), HookError> {
        *self.seen.lock() = self.relational.get_db();
        token.cancel();
        Err("shutdown requested".into())
    }

    async fn on_stop(&self, _token: &CancellationToken) -> Result<(), HookError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_cancelled_boot_closes_started_connectors() {
    let store = common::create_test_store();
    let lifecycle = Lifecycle::new();
    let logger = ScopedLogger::default();
    let relational = sqlite::sqlite::register("relational", &lifecycle, &logger, store);
    let interrupted = Arc::new(InterruptedBoot {
        relational: relational.clone(),
        seen: Mutex::new(None),
    });
    lifecycle.append(interrupted.clone());

    let token = CancellationToken::new();
    let error = lifecycle.start(&token).await.unwrap_err();
    assert!(matches!(error, LifecycleError::StartFailed { ref hook, .. } if hook == "interrupted"));

    let pool = interrupted.seen.lock().clone().expect("relational pool was published");
    assert!(pool.is_closed(), "Rollback should close the pool before start returns");
    assert!(relational.get_db().is_none());
}
