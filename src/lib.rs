//! # Store Connectors
//!
//! Lifecycle-managed connectors for three storage backends, each owning one
//! configuration scope and at most one live, verified driver handle.
//!
//! ## Overview
//!
//! A connector is built once at wiring time, which only registers its option
//! defaults. When the application's [`lifecycle`] fires its start event the
//! connector resolves its options, opens the driver connection, checks it
//! with a single round trip and only then publishes the handle. The stop
//! event unpublishes the handle and closes it.
//!
//! ## Backends
//!
//! - **SQLite** (relational, embedded) through `sqlx`: handle is a `SqlitePool`
//! - **MongoDB** (document) through the official driver: handle is a `Client`
//! - **Neo4j** (graph) through `neo4rs`: handle is a `Graph`, plus per-database
//!   sessions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use store_connectors::config::structs::config_store::ConfigStore;
//! use store_connectors::lifecycle::structs::lifecycle::Lifecycle;
//! use store_connectors::logging::structs::scoped_logger::ScopedLogger;
//! use store_connectors::sqlite;
//!
//! let store = Arc::new(ConfigStore::new());
//! store.set("relational.dataSource", "sqlite://app.db?mode=rwc");
//!
//! let lifecycle = Lifecycle::new();
//! let relational = sqlite::sqlite::register("relational", &lifecycle, &ScopedLogger::default(), store);
//!
//! lifecycle.start(&token).await?;
//! let pool = relational.get_db().unwrap();
//! lifecycle.stop(&token).await?;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Scoped configuration store and the TOML configuration file
//! - [`connector`] - Generic connector state machine and backend trait
//! - [`lifecycle`] - Start/stop hooks run in registration order
//! - [`logging`] - Logger setup and per-connector named loggers
//! - [`mongo`] - MongoDB backend and URI assembly
//! - [`neo4j`] - Neo4j backend and graph sessions
//! - [`sqlite`] - SQLite backend
//! - [`structs`] - CLI argument parsing

/// Configuration management module.
///
/// Holds the shared key/value store connectors resolve their options from,
/// with explicit values, environment overrides and registered defaults, and
/// the `config.toml` file that seeds it.
pub mod config;

/// Generic connector module.
///
/// Drives any backend through open, verify, publish and close, threading a
/// cancellation token through every driver call.
pub mod connector;

/// Application lifecycle module.
pub mod lifecycle;

/// Logging setup and scoped loggers.
pub mod logging;

/// MongoDB document backend.
pub mod mongo;

/// Neo4j graph backend.
pub mod neo4j;

/// SQLite relational backend.
pub mod sqlite;

/// CLI argument parsing.
pub mod structs;
