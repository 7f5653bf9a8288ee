//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade with an
//! `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
