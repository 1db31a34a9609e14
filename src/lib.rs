//! Taiga settings - environment-driven configuration for Taiga backends
//!
//! Resolves database, site, storage, email, broker, task-queue and
//! feature settings from environment variables into one immutable
//! [`Configuration`] record, built once at startup and passed to whatever
//! needs it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record, its derivation
//!   rules and the `Environment` port
//! - **Infrastructure Layer** (`infrastructure`): environment sources, the
//!   loader, logging and redaction
//! - **CLI Layer** (`cli`): `show`, `check` and `vars` commands
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use taiga_settings::ConfigurationLoader;
//!
//! let env = HashMap::from([
//!     ("TAIGA_SITES_SCHEME".to_string(), "https".to_string()),
//!     ("TAIGA_SITES_DOMAIN".to_string(), "example.com".to_string()),
//! ]);
//! let config = ConfigurationLoader::load(&env).unwrap();
//! assert_eq!(config.media.url, "https://example.com/media/");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    AssetSettings, BrokerSettings, Configuration, DatabaseSettings, EmailSettings, EventsSettings,
    FeatureFlags, SecurityWarning, Site, SitesSettings, StorageSettings, TaskQueueSettings,
};
pub use domain::{ConfigError, Environment};
pub use infrastructure::config::ConfigurationLoader;
pub use infrastructure::environment::{LayeredEnvironment, ProcessEnvironment};
