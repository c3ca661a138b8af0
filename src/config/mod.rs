//! Configuration management module.
//!
//! Two layers live here:
//!
//! - **`ConfigStore`**: the process-wide key/value store every connector reads
//!   from. Keys are dotted paths (`<scope>.<key>`), values are loosely typed
//!   and converted on read. Explicit values win over environment overrides,
//!   which win over registered defaults.
//! - **`Configuration`**: the `config.toml` file the binary boots from. It
//!   names the connectors to wire and carries one table per scope that is
//!   flattened into the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use store_connectors::config::structs::config_store::ConfigStore;
//! use store_connectors::config::structs::scoped_config::ScopedConfig;
//!
//! let store = Arc::new(ConfigStore::new());
//! store.load_toml_str("[primary]\nport = 27018")?;
//!
//! let scoped = ScopedConfig::new("primary", store.clone());
//! scoped.register_default("port", 27017);
//! assert_eq!(scoped.get_int("port"), 27018);
//! ```

/// Path construction and value parsing helpers.
#[allow(clippy::module_inception)]
pub mod config;

/// Configuration enumerations (values, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading and resolution.
pub mod impls;
