//! Implementation blocks for loggers.

pub mod scoped_logger;
