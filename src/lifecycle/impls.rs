//! Implementation blocks for the scheduler.

pub mod lifecycle;
