use std::sync::Arc;
use std::time::Duration;
use crate::config::config::config_path;
use crate::config::enums::config_value::ConfigValue;
use crate::config::structs::config_store::ConfigStore;
use crate::config::structs::scoped_config::ScopedConfig;

impl ScopedConfig {
    pub fn new(scope: &str, store: Arc<ConfigStore>) -> ScopedConfig {
        ScopedConfig {
            scope: scope.to_string(),
            store,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn path(&self, key: &str) -> String {
        config_path(&self.scope, key)
    }

    pub fn register_default(&self, key: &str, value: impl Into<ConfigValue>) {
        self.store.set_default(&self.path(key), value);
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.store.get(&self.path(key))
    }

    pub fn get_string(&self, key: &str) -> String {
        self.store.get_string(&self.path(key))
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.store.get_int(&self.path(key))
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.store.get_bool(&self.path(key))
    }

    pub fn get_duration(&self, key: &str) -> Duration {
        self.store.get_duration(&self.path(key))
    }
}
