use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::config::enums::config_value::ConfigValue;

#[derive(Debug, Default)]
pub struct ConfigStore {
    pub(crate) values: RwLock<BTreeMap<String, ConfigValue>>,
    pub(crate) defaults: RwLock<BTreeMap<String, ConfigValue>>,
    pub(crate) env_prefix: Option<String>,
}
