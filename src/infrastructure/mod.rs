//! Infrastructure layer module
//!
//! This module contains the adapters around the domain:
//! - Environment sources (process, env files, layering)
//! - Configuration loading
//! - Logging infrastructure and secret redaction

pub mod config;
pub mod environment;
pub mod logging;
