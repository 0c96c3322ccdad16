//! CpeName Common - Shared support for the cpename binaries
//!
//! Logging setup and configuration handling; the parsing crates stay
//! free of both.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LoggingConfig};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogFormat};
