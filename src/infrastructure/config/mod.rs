//! Configuration management infrastructure
//!
//! - Catalog of recognized environment variables
//! - Environment-driven loader for the backend settings
//! - Hierarchical settings of the tool itself (figment)

pub mod loader;
pub mod tool;
pub mod variables;

pub use loader::{parse_flag, parse_port, ConfigurationLoader};
pub use tool::{ToolConfig, ToolConfigError, ToolConfigLoader};
pub use variables::{ValueKind, Variable};
