pub mod configuration;
pub mod security;
pub mod task_queue;

pub use configuration::{
    AssetSettings, BrokerSettings, Configuration, DatabaseSettings, EmailSettings, EventsSettings,
    FeatureFlags, Site, SitesSettings, StorageSettings,
};
pub use security::SecurityWarning;
pub use task_queue::{DeliveryMode, ExchangeType, QueueDefinition, Serializer, TaskQueueSettings};
