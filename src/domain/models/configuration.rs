use serde::{Deserialize, Serialize};

use super::task_queue::TaskQueueSettings;

/// Database engine identifier handed to the web framework
pub const DATABASE_ENGINE: &str = "django.db.backends.postgresql";

/// Storage backend serving attachments behind access tokens
pub const PROTECTED_STORAGE_BACKEND: &str =
    "taiga_contrib_protected.storage.ProtectedFileSystemStorage";

/// Application providing the protected storage backend
pub const PROTECTED_STORAGE_APP: &str = "taiga_contrib_protected";

/// Push backend relaying change events through the broker
pub const EVENTS_PUSH_BACKEND: &str = "taiga.events.backends.rabbitmq.EventsPushBackend";

/// Broker virtual host shared by events and tasks
pub const BROKER_VHOST: &str = "taiga";

/// Minimum delay between two change notification emails to one user
pub const CHANGE_NOTIFICATIONS_MIN_INTERVAL_SECS: u64 = 120;

/// Lifetime of cached instance statistics
pub const STATS_CACHE_TIMEOUT_SECS: u64 = 60 * 60;

/// Resolved backend settings
///
/// Built once by the loader and never mutated afterwards. Consumers take
/// it by reference (or behind an `Arc`) instead of reading a global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub debug: bool,
    pub secret_key: String,
    pub database: DatabaseSettings,
    pub sites: SitesSettings,
    /// Prefix project slugs with the owner's username
    pub default_project_slug_prefix: bool,
    pub media: AssetSettings,
    pub static_files: AssetSettings,
    pub storage: StorageSettings,
    pub email: EmailSettings,
    pub broker: BrokerSettings,
    pub events: EventsSettings,
    pub task_queue: TaskQueueSettings,
    /// Extra applications installed next to the core ones
    pub contrib_apps: Vec<String>,
    pub features: FeatureFlags,
}

/// Database connection parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub engine: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    /// Passed through as given; the database driver parses it
    pub port: String,
}

/// A named site the backend builds absolute links for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub scheme: String,
    pub domain: String,
}

/// Public addressing of the deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitesSettings {
    pub scheme: String,
    pub domain: String,
    /// Path prefix the application is mounted under, empty for the root
    pub script_name: String,
    /// `{scheme}://{domain}{script_name}`
    pub base_url: String,
    pub api: Site,
    /// Front site; its domain carries the path prefix
    pub front: Site,
}

impl SitesSettings {
    pub fn new(scheme: String, domain: String, script_name: String) -> Self {
        let base_url = format!("{scheme}://{domain}{script_name}");
        let api = Site {
            name: "api".to_string(),
            scheme: scheme.clone(),
            domain: domain.clone(),
        };
        let front = Site {
            name: "front".to_string(),
            scheme: scheme.clone(),
            domain: format!("{domain}{script_name}"),
        };
        Self {
            scheme,
            domain,
            script_name,
            base_url,
            api,
            front,
        }
    }

    /// Absolute URL the API is served from
    pub fn api_url(&self) -> &str {
        &self.base_url
    }

    pub fn site(&self, name: &str) -> Option<&Site> {
        [&self.api, &self.front].into_iter().find(|s| s.name == name)
    }
}

/// Filesystem location and public URL of a class of files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSettings {
    pub root: String,
    pub url: String,
}

impl AssetSettings {
    /// Files under `root`, published at `{base_url}/{segment}/`
    pub fn published(root: String, base_url: &str, segment: &str) -> Self {
        Self {
            root,
            url: format!("{base_url}/{segment}/"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    pub default_backend: String,
    pub thumbnail_backend: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            default_backend: PROTECTED_STORAGE_BACKEND.to_string(),
            thumbnail_backend: PROTECTED_STORAGE_BACKEND.to_string(),
        }
    }
}

/// Outgoing mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    pub backend: String,
    pub use_tls: bool,
    pub use_ssl: bool,
    pub host: String,
    pub port: u16,
    pub host_user: String,
    pub host_password: String,
    pub default_from: String,
    pub change_notifications_min_interval_secs: u64,
}

/// Message broker connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    /// Interpolated into `url` verbatim
    pub port: String,
    pub vhost: String,
    /// `amqp://{user}:{password}@{host}:{port}/{vhost}`
    pub url: String,
}

impl BrokerSettings {
    pub fn new(user: String, password: String, host: String, port: String) -> Self {
        let vhost = BROKER_VHOST.to_string();
        let url = format!("amqp://{user}:{password}@{host}:{port}/{vhost}");
        Self {
            user,
            password,
            host,
            port,
            vhost,
            url,
        }
    }
}

/// Realtime change events pushed through the broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsSettings {
    pub push_backend: String,
    pub url: String,
}

/// Optional features and their companion values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub telemetry: bool,
    pub public_register: bool,
    pub webhooks: bool,
    pub feedback: bool,
    /// Recipient of user feedback when `feedback` is on
    pub feedback_email: String,
    pub stats: bool,
    pub stats_cache_timeout_secs: u64,
}
