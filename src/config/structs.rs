//! Configuration data structures.

/// Process-wide dotted-path key/value store.
pub mod config_store;

/// A store view rooted at one connector scope.
pub mod scoped_config;

/// Root of `config.toml`.
pub mod configuration;

/// One `[[connectors]]` entry of `config.toml`.
pub mod connector_config;
