use std::fmt;

use serde::Serialize;

use super::configuration::Configuration;
use super::task_queue::Serializer;

/// Secret key shipped as the default; it must be replaced in production
pub const PLACEHOLDER_SECRET_KEY: &str = "taiga-backend-secret-key";

/// Credential used by every default account (database and broker)
pub const DEFAULT_CREDENTIAL: &str = "taiga";

/// Legal but insecure setting found in a resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SecurityWarning {
    DebugEnabled,
    DefaultSecretKey,
    DefaultDatabasePassword,
    DefaultBrokerCredentials,
    UnsafeTaskSerializer(Serializer),
}

impl fmt::Display for SecurityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DebugEnabled => write!(f, "debug mode is enabled (DJANGO_DEBUG=True)"),
            Self::DefaultSecretKey => {
                write!(f, "TAIGA_SECRET_KEY is unset or uses the shipped placeholder")
            }
            Self::DefaultDatabasePassword => {
                write!(f, "POSTGRES_PASSWORD is the default '{DEFAULT_CREDENTIAL}'")
            }
            Self::DefaultBrokerCredentials => {
                write!(f, "RABBITMQ_USER/RABBITMQ_PASS are the default '{DEFAULT_CREDENTIAL}'")
            }
            Self::UnsafeTaskSerializer(serializer) => write!(
                f,
                "task queue accepts '{}' payloads, which can execute code when decoded",
                serializer.as_str()
            ),
        }
    }
}

impl Configuration {
    /// Insecure settings present in this configuration, in a stable order
    pub fn security_warnings(&self) -> Vec<SecurityWarning> {
        let mut warnings = Vec::new();
        if self.debug {
            warnings.push(SecurityWarning::DebugEnabled);
        }
        if self.secret_key == PLACEHOLDER_SECRET_KEY {
            warnings.push(SecurityWarning::DefaultSecretKey);
        }
        if self.database.password == DEFAULT_CREDENTIAL {
            warnings.push(SecurityWarning::DefaultDatabasePassword);
        }
        if self.broker.user == DEFAULT_CREDENTIAL && self.broker.password == DEFAULT_CREDENTIAL {
            warnings.push(SecurityWarning::DefaultBrokerCredentials);
        }
        warnings.extend(
            self.task_queue
                .unsafe_serializers()
                .into_iter()
                .map(SecurityWarning::UnsafeTaskSerializer),
        );
        warnings
    }
}
