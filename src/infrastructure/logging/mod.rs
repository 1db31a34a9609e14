//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional rolling JSON log files
//! - Secret redaction for anything that prints settings

pub mod config;
pub mod logger;
pub mod redaction;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use redaction::{SecretRedactor, MASK};
