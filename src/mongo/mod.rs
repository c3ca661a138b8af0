//! Document backend on MongoDB.
//!
//! The connection URI is assembled from discrete options:
//!
//! ```text
//! mongodb://[user:password@]host:port/?[authMechanism=..&][authSource=db&][readPreference=..&]tls=<sslmode>
//! ```
//!
//! Query parameters are emitted sorted by name and `tls` is always present.
//! The credentials prefix is only written when both user and password are
//! set, and both are percent-encoded.

#[allow(clippy::module_inception)]
pub mod mongo;

/// MongoDB connector structures.
pub mod structs;

/// Implementation blocks for the MongoDB backend.
pub mod impls;
