//! Implementation blocks for configuration types.

pub mod config_value;
pub mod config_store;
pub mod scoped_config;
pub mod configuration;
pub mod connector_config;
