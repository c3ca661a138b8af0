//! Application lifecycle binding.
//!
//! Connectors are cheap to construct: building one only registers option
//! defaults. The expensive, fallible work happens when the application's
//! [`Lifecycle`](structs::lifecycle::Lifecycle) fires its start event and
//! runs every appended [`LifecycleHook`](traits::lifecycle_hook::LifecycleHook)
//! in registration order. The stop event runs them in reverse.
//!
//! # Example
//!
//! ```rust,ignore
//! let lifecycle = Lifecycle::new();
//! let relational = sqlite::register("relational", &lifecycle, &logger, store.clone());
//!
//! lifecycle.start(&token).await?;
//! let pool = relational.get_db();
//! lifecycle.stop(&token).await?;
//! ```

/// Lifecycle enumerations.
pub mod enums;

/// Implementation blocks for the scheduler.
pub mod impls;

/// Lifecycle data structures.
pub mod structs;

/// Hook trait definitions.
pub mod traits;

#[cfg(test)]
mod tests;
