//! MongoDB connector structures.

pub mod mongodb_backend;

pub mod mongodb_options;
