mod common;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use store_connectors::connector::enums::connector_error::ConnectorError;
use store_connectors::connector::enums::driver_error::DriverError;
use store_connectors::lifecycle::enums::lifecycle_error::LifecycleError;
use store_connectors::lifecycle::structs::lifecycle::Lifecycle;
use store_connectors::logging::structs::scoped_logger::ScopedLogger;
use store_connectors::sqlite::sqlite::register;

#[tokio::test]
async fn test_sqlite_in_memory_default() {
    let lifecycle = Lifecycle::new();
    let connector = register("relational", &lifecycle, &ScopedLogger::default(), common::create_test_store());
    let token = CancellationToken::new();

    assert!(connector.get_db().is_none(), "Nothing should be published before start");
    lifecycle.start(&token).await.unwrap();

    let pool = connector.get_db().expect("Pool should be published after start");
    let value: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.unwrap();
    assert_eq!(value, 1);

    lifecycle.stop(&token).await.unwrap();
    assert!(connector.get_db().is_none(), "Pool should be unpublished after stop");
    assert!(pool.is_closed(), "Pool should be closed after stop");
}

#[tokio::test]
async fn test_sqlite_file_data_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let store = common::create_test_store();
    store.set("relational.dataSource", common::sqlite_file_source(&temp_dir, "data.db"));
    let lifecycle = Lifecycle::new();
    let connector = register("relational", &lifecycle, &ScopedLogger::default(), store);
    let token = CancellationToken::new();

    lifecycle.start(&token).await.unwrap();
    let pool = connector.get_db().unwrap();
    sqlx::query("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO notes (body) VALUES (?)")
        .bind("hello")
        .execute(&pool)
        .await
        .unwrap();
    lifecycle.stop(&token).await.unwrap();
    assert!(temp_dir.path().join("data.db").exists(), "Database file should be created");

    lifecycle.start(&token).await.unwrap();
    let pool = connector.get_db().unwrap();
    let body: String = sqlx::query_scalar("SELECT body FROM notes WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(body, "hello");
    lifecycle.stop(&token).await.unwrap();
}

#[tokio::test]
async fn test_sqlite_scopes_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let store = common::create_test_store();
    store.set("left.dataSource", common::sqlite_file_source(&temp_dir, "left.db"));
    store.set("right.dataSource", common::sqlite_file_source(&temp_dir, "right.db"));
    let lifecycle = Lifecycle::new();
    let logger = ScopedLogger::default();
    let left = register("left", &lifecycle, &logger, store.clone());
    let right = register("right", &lifecycle, &logger, store);
    let token = CancellationToken::new();

    lifecycle.start(&token).await.unwrap();
    sqlx::query("CREATE TABLE only_left (id INTEGER)")
        .execute(&left.get_db().unwrap())
        .await
        .unwrap();
    let tables: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE name = 'only_left'")
        .fetch_one(&right.get_db().unwrap())
        .await
        .unwrap();
    assert_eq!(tables, 0, "Right scope should not see the left database");
    assert_eq!(left.logger().target(), "store_connectors.left");

    lifecycle.stop(&token).await.unwrap();
}

#[tokio::test]
async fn test_sqlite_unopenable_file_keeps_driver_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = common::create_test_store();
    let missing = temp_dir.path().join("missing").join("data.db");
    store.set("relational.dataSource", format!("sqlite://{}", missing.display()));
    let lifecycle = Lifecycle::new();
    let connector = register("relational", &lifecycle, &ScopedLogger::default(), store);

    let error = connector.start(&CancellationToken::new()).await.unwrap_err();
    assert!(matches!(error, ConnectorError::Open { source: DriverError::Sqlite(_), .. }));
    assert!(!connector.is_started());
    connector.stop(&CancellationToken::new()).await.unwrap();
}

#[tokio::test]
async fn test_sqlite_lifecycle_rolls_back_on_failure() {
    let temp_dir = TempDir::new().unwrap();
    let store = common::create_test_store();
    store.set("broken.dataSource", format!("sqlite://{}", temp_dir.path().join("no").join("x.db").display()));
    let lifecycle = Lifecycle::new();
    let logger = ScopedLogger::default();
    let healthy = register("healthy", &lifecycle, &logger, store.clone());
    let broken = register("broken", &lifecycle, &logger, store);

    match lifecycle.start(&CancellationToken::new()).await {
        Err(LifecycleError::StartFailed { hook, .. }) => assert_eq!(hook, "sqlite:broken"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(healthy.get_db().is_none(), "Started connectors should be rolled back");
    assert!(broken.get_db().is_none());
    lifecycle.stop(&CancellationToken::new()).await.unwrap();
}
