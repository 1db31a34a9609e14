//! Environment sources
//!
//! - Live process environment
//! - `.env`-style files
//! - Layering of one source over another

pub mod env_file;

pub use env_file::load_env_file;

use std::env::{self, VarError};

use crate::domain::{ConfigError, Environment};

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                key: key.to_string(),
            }),
        }
    }
}

/// Looks a key up in `primary` first and falls back to `fallback`
#[derive(Debug, Clone)]
pub struct LayeredEnvironment<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Environment, F: Environment> LayeredEnvironment<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub const fn primary(&self) -> &P {
        &self.primary
    }

    pub const fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: Environment, F: Environment> Environment for LayeredEnvironment<P, F> {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.primary.var(key)? {
            Some(value) => Ok(Some(value)),
            None => self.fallback.var(key),
        }
    }
}
