//! Domain layer for Taiga settings resolution
//!
//! This module contains the configuration record, its derivation rules
//! and the port the loader reads the environment through.

pub mod error;
pub mod models;
pub mod ports;

pub use error::ConfigError;
pub use ports::Environment;
