use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use crate::config::config::{config_path, env_var_name, normalize_path};
use crate::config::enums::config_value::ConfigValue;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::config_store::ConfigStore;

impl ConfigStore {
    pub fn new() -> ConfigStore {
        ConfigStore::default()
    }

    /// Enables environment overrides: `primary.port` is read from
    /// `<PREFIX>_PRIMARY_PORT` when no explicit value is set.
    pub fn with_env_prefix(prefix: &str) -> ConfigStore {
        ConfigStore {
            env_prefix: Some(prefix.to_string()),
            ..ConfigStore::default()
        }
    }

    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    pub fn set(&self, path: &str, value: impl Into<ConfigValue>) {
        self.values.write().insert(normalize_path(path), value.into());
    }

    /// First registration wins; later calls for the same path are no-ops.
    pub fn set_default(&self, path: &str, value: impl Into<ConfigValue>) {
        self.defaults
            .write()
            .entry(normalize_path(path))
            .or_insert_with(|| value.into());
    }

    pub fn is_set(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.values.read().contains_key(&path) || self.env_value(&path).is_some()
    }

    pub fn get(&self, path: &str) -> Option<ConfigValue> {
        let path = normalize_path(path);
        if let Some(value) = self.values.read().get(&path) {
            return Some(value.clone());
        }
        if let Some(value) = self.env_value(&path) {
            return Some(value);
        }
        self.defaults.read().get(&path).cloned()
    }

    pub fn get_string(&self, path: &str) -> String {
        self.get(path).map(|value| value.as_string()).unwrap_or_default()
    }

    pub fn get_int(&self, path: &str) -> i64 {
        self.get(path).and_then(|value| value.as_int()).unwrap_or_default()
    }

    pub fn get_bool(&self, path: &str) -> bool {
        self.get(path).and_then(|value| value.as_bool()).unwrap_or_default()
    }

    pub fn get_duration(&self, path: &str) -> Duration {
        self.get(path).and_then(|value| value.as_duration()).unwrap_or_default()
    }

    pub fn merge_table(&self, table: &toml::Table) {
        let mut values = self.values.write();
        flatten_into(&mut values, None, table);
    }

    pub fn load_toml_str(&self, data: &str) -> Result<(), ConfigurationError> {
        let table: toml::Table = toml::from_str(data)?;
        self.merge_table(&table);
        Ok(())
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: BTreeSet<String> = self.values.read().keys().cloned().collect();
        keys.extend(self.defaults.read().keys().cloned());
        keys.into_iter().collect()
    }

    fn env_value(&self, path: &str) -> Option<ConfigValue> {
        let prefix = self.env_prefix.as_deref()?;
        std::env::var(env_var_name(prefix, path)).ok().map(ConfigValue::String)
    }
}

fn flatten_into(target: &mut BTreeMap<String, ConfigValue>, prefix: Option<&str>, table: &toml::Table) {
    for (key, value) in table {
        let path = match prefix {
            Some(prefix) => config_path(prefix, key),
            None => key.clone(),
        };
        match value {
            toml::Value::Table(inner) => flatten_into(target, Some(&path), inner),
            other => {
                target.insert(normalize_path(&path), ConfigValue::from_toml(other));
            }
        }
    }
}
