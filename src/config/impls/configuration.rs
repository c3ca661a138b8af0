use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use log::LevelFilter;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::config_store::ConfigStore;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::connector_config::ConnectorConfig;
use crate::connector::enums::connector_engine::ConnectorEngine;

const SCOPE_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_-]*$";

const DURATION_NOTE: &str = "\
# connectionTimeout and maxTransactionRetryTime take a unit: \"500ms\", \"30s\", \"1m30s\".
# A bare number such as 30 counts seconds, not nanoseconds.
";

impl Configuration {
    pub fn init() -> Configuration {
        let connectors = vec![
            ConnectorConfig::new("relational", ConnectorEngine::sqlite),
            ConnectorConfig {
                enabled: false,
                ..ConnectorConfig::new("document", ConnectorEngine::mongodb)
            },
            ConnectorConfig {
                enabled: false,
                ..ConnectorConfig::new("graph", ConnectorEngine::neo4j)
            },
        ];

        let mut settings = toml::Table::new();
        for connector in &connectors {
            let mut section = toml::Table::new();
            for (key, value) in connector.engine.default_options() {
                section.insert(key.to_string(), value.to_toml());
            }
            settings.insert(connector.scope.clone(), toml::Value::Table(section));
        }

        Configuration {
            log_level: String::from("info"),
            env_prefix: Some(String::from("STORE_CONNECTORS")),
            connectors,
            settings,
        }
    }

    /// The default configuration as written by `--create-config`, with a
    /// note on duration units under every neo4j section.
    pub fn init_toml() -> Result<String, ConfigurationError> {
        let config = Configuration::init();
        let rendered = toml::to_string(&config)?;
        let noted: Vec<String> = config
            .connectors
            .iter()
            .filter(|connector| connector.engine == ConnectorEngine::neo4j)
            .map(|connector| format!("[{}]", connector.scope))
            .collect();

        let mut output = String::with_capacity(rendered.len() + DURATION_NOTE.len());
        for line in rendered.lines() {
            output.push_str(line);
            output.push('\n');
            if noted.iter().any(|header| header == line) {
                output.push_str(DURATION_NOTE);
            }
        }
        Ok(output)
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init_toml()?;
                if let Err(error) = Configuration::save_file(path, config_toml) {
                    eprintln!("{path} file could not be created, check permissions...");
                    return Err(error);
                }
                eprintln!("Please edit {path}, exiting now...");
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.log_level_filter()?;

        let pattern = Regex::new(SCOPE_PATTERN).map_err(|_| ConfigurationError::InvalidScope(String::new()))?;
        let mut seen = BTreeSet::new();
        for connector in &self.connectors {
            if !pattern.is_match(&connector.scope) {
                return Err(ConfigurationError::InvalidScope(connector.scope.clone()));
            }
            if !seen.insert(connector.scope.to_lowercase()) {
                return Err(ConfigurationError::DuplicateScope(connector.scope.clone()));
            }
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(LevelFilter::Off),
            "trace" => Ok(LevelFilter::Trace),
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            other => Err(ConfigurationError::UnknownLogLevel(other.to_string())),
        }
    }

    /// Builds the store every connector resolves from, seeded with the
    /// per-scope tables of this file.
    pub fn config_store(&self) -> ConfigStore {
        let store = match &self.env_prefix {
            Some(prefix) => ConfigStore::with_env_prefix(prefix),
            None => ConfigStore::new(),
        };
        store.merge_table(&self.settings);
        store
    }

    pub fn enabled_connectors(&self) -> impl Iterator<Item = &ConnectorConfig> {
        self.connectors.iter().filter(|connector| connector.enabled)
    }
}
