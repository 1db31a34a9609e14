use serde::{Deserialize, Serialize};

/// Queue that receives tasks with no explicit route
pub const DEFAULT_QUEUE: &str = "tasks";

/// Exchange tasks are published to
pub const DEFAULT_EXCHANGE: &str = "tasks";

/// Routing key for tasks with no explicit route
pub const DEFAULT_ROUTING_KEY: &str = "task.default";

/// Timezone the task scheduler runs in
pub const TIMEZONE: &str = "Europe/Madrid";

/// Payload serialization formats understood by the task queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Serializer {
    Pickle,
    Json,
    Msgpack,
    Yaml,
}

impl Serializer {
    /// Whether decoding this format can execute code supplied by the sender
    pub const fn is_unsafe(self) -> bool {
        matches!(self, Self::Pickle)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickle => "pickle",
            Self::Json => "json",
            Self::Msgpack => "msgpack",
            Self::Yaml => "yaml",
        }
    }
}

/// AMQP exchange types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    Direct,
    Topic,
    Fanout,
    Headers,
}

/// AMQP delivery mode of messages published to a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Kept in memory only (mode 1)
    Transient,
    /// Written to disk by the broker (mode 2)
    Persistent,
}

impl DeliveryMode {
    /// Numeric value used on the wire
    pub const fn amqp_value(self) -> u8 {
        match self {
            Self::Transient => 1,
            Self::Persistent => 2,
        }
    }
}

/// A queue declared on the broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueDefinition {
    pub name: String,
    pub routing_key: String,
    /// `None` leaves the broker default in place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_mode: Option<DeliveryMode>,
}

impl QueueDefinition {
    pub fn new(name: &str, routing_key: &str) -> Self {
        Self {
            name: name.to_string(),
            routing_key: routing_key.to_string(),
            delivery_mode: None,
        }
    }

    #[must_use]
    pub fn with_delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = Some(mode);
        self
    }
}

/// Asynchronous task dispatch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQueueSettings {
    /// Dispatch tasks to workers instead of running them inline
    pub enabled: bool,
    pub broker_url: String,
    /// Where task results are stored; `None` discards them
    pub result_backend: Option<String>,
    pub accept_content: Vec<Serializer>,
    pub task_serializer: Serializer,
    pub result_serializer: Serializer,
    pub timezone: String,
    pub default_queue: String,
    pub default_exchange: String,
    pub default_exchange_type: ExchangeType,
    pub default_routing_key: String,
    pub queues: Vec<QueueDefinition>,
}

impl TaskQueueSettings {
    /// Standard Taiga topology: a durable `tasks` queue and a `transient`
    /// queue whose messages are not persisted by the broker
    pub fn taiga(enabled: bool, broker_url: String) -> Self {
        Self {
            enabled,
            broker_url,
            result_backend: None,
            accept_content: vec![Serializer::Pickle],
            task_serializer: Serializer::Pickle,
            result_serializer: Serializer::Pickle,
            timezone: TIMEZONE.to_string(),
            default_queue: DEFAULT_QUEUE.to_string(),
            default_exchange: DEFAULT_EXCHANGE.to_string(),
            default_exchange_type: ExchangeType::Topic,
            default_routing_key: DEFAULT_ROUTING_KEY.to_string(),
            queues: vec![
                QueueDefinition::new("tasks", "task.#"),
                QueueDefinition::new("transient", "transient.#")
                    .with_delivery_mode(DeliveryMode::Transient),
            ],
        }
    }

    pub fn queue(&self, name: &str) -> Option<&QueueDefinition> {
        self.queues.iter().find(|q| q.name == name)
    }

    /// Serializers in use that are unsafe for untrusted input, deduplicated
    pub fn unsafe_serializers(&self) -> Vec<Serializer> {
        let mut found: Vec<Serializer> = Vec::new();
        let in_use = self
            .accept_content
            .iter()
            .copied()
            .chain([self.task_serializer, self.result_serializer]);
        for serializer in in_use {
            if serializer.is_unsafe() && !found.contains(&serializer) {
                found.push(serializer);
            }
        }
        found
    }
}
