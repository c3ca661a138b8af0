//! Configuration enumeration types.

/// Loosely typed configuration value.
pub mod config_value;

/// Errors raised while loading or validating `config.toml`.
pub mod configuration_error;
