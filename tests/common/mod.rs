#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use store_connectors::config::structs::config_store::ConfigStore;

pub fn create_test_store() -> Arc<ConfigStore> {
    Arc::new(ConfigStore::new())
}

/// A read-write file database inside `dir`, created on first open.
pub fn sqlite_file_source(dir: &TempDir, name: &str) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join(name).display())
}

/// A token that fires on its own after `after`.
pub fn cancel_after(after: Duration) -> CancellationToken {
    let token = CancellationToken::new();
    let deadline = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        deadline.cancel();
    });
    token
}

/// Points a document scope at a port nothing listens on.
pub fn unreachable_mongo(store: &ConfigStore, scope: &str) {
    store.set(&format!("{scope}.host"), "127.0.0.1");
    store.set(&format!("{scope}.port"), 1i64);
}

/// Points a graph scope at a port nothing listens on.
pub fn unreachable_neo4j(store: &ConfigStore, scope: &str) {
    store.set(&format!("{scope}.uri"), "bolt://127.0.0.1:1");
    store.set(&format!("{scope}.connectionTimeout"), "2s");
}
