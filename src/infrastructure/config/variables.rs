//! Catalog of recognized environment variables
//!
//! The loader takes its defaults from here, so the documented default of
//! a variable and the value used when it is unset are the same string.

use serde::Serialize;
use std::fmt;

/// How the raw string of a variable is turned into a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Taken as-is
    Text,
    /// True only for the exact string `True`
    Flag,
    /// Base-10 integer in `0..=65535`, surrounding whitespace ignored
    Port,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Flag => "flag",
            Self::Port => "port",
        };
        f.write_str(name)
    }
}

/// A recognized environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub key: &'static str,
    pub default: &'static str,
    pub kind: ValueKind,
    /// Value must not be printed or logged
    pub secret: bool,
    pub description: &'static str,
}

const fn text(key: &'static str, default: &'static str, description: &'static str) -> Variable {
    Variable {
        key,
        default,
        kind: ValueKind::Text,
        secret: false,
        description,
    }
}

const fn secret(key: &'static str, default: &'static str, description: &'static str) -> Variable {
    Variable {
        key,
        default,
        kind: ValueKind::Text,
        secret: true,
        description,
    }
}

const fn flag(key: &'static str, default: &'static str, description: &'static str) -> Variable {
    Variable {
        key,
        default,
        kind: ValueKind::Flag,
        secret: false,
        description,
    }
}

const fn port(key: &'static str, default: &'static str, description: &'static str) -> Variable {
    Variable {
        key,
        default,
        kind: ValueKind::Port,
        secret: false,
        description,
    }
}

// Generic
pub const DJANGO_DEBUG: Variable = flag("DJANGO_DEBUG", "False", "Debug mode");
pub const TAIGA_SECRET_KEY: Variable = secret(
    "TAIGA_SECRET_KEY",
    "taiga-backend-secret-key",
    "Signing secret",
);

// Database
pub const POSTGRES_DB: Variable = text("POSTGRES_DB", "taiga", "Database name");
pub const POSTGRES_USER: Variable = text("POSTGRES_USER", "taiga", "Database user");
pub const POSTGRES_PASSWORD: Variable = secret("POSTGRES_PASSWORD", "taiga", "Database password");
pub const POSTGRES_HOST: Variable = text("POSTGRES_HOST", "db", "Database host");
pub const POSTGRES_PORT: Variable = text("POSTGRES_PORT", "5432", "Database port, passed to the driver as-is");

// Sites
pub const TAIGA_SITES_SCHEME: Variable = text("TAIGA_SITES_SCHEME", "http", "Public URL scheme");
pub const TAIGA_SITES_DOMAIN: Variable =
    text("TAIGA_SITES_DOMAIN", "localhost", "Public domain, with port if any");
pub const FORCE_SCRIPT_NAME: Variable =
    text("FORCE_SCRIPT_NAME", "", "Path prefix the application is mounted under");

// Media and static
pub const MEDIA_ROOT: Variable = text("MEDIA_ROOT", "/app/media", "Uploaded files directory");
pub const STATIC_ROOT: Variable = text("STATIC_ROOT", "/app/static", "Static assets directory");

// Email
pub const EMAIL_BACKEND: Variable = text(
    "EMAIL_BACKEND",
    "django.core.mail.backends.smtp.EmailBackend",
    "Mail backend identifier",
);
pub const DEFAULT_FROM_EMAIL: Variable =
    text("DEFAULT_FROM_EMAIL", "no-reply@example.com", "Sender address");
pub const EMAIL_USE_TLS: Variable = flag("EMAIL_USE_TLS", "False", "Use STARTTLS");
pub const EMAIL_USE_SSL: Variable = flag("EMAIL_USE_SSL", "False", "Use implicit TLS");
pub const EMAIL_HOST: Variable = text("EMAIL_HOST", "localhost", "SMTP host");
pub const EMAIL_PORT: Variable = port("EMAIL_PORT", "25", "SMTP port");
pub const EMAIL_HOST_USER: Variable = text("EMAIL_HOST_USER", "", "SMTP user");
pub const EMAIL_HOST_PASSWORD: Variable = secret("EMAIL_HOST_PASSWORD", "", "SMTP password");

// Broker
pub const RABBITMQ_USER: Variable = text("RABBITMQ_USER", "taiga", "Broker user");
pub const RABBITMQ_PASS: Variable = secret("RABBITMQ_PASS", "taiga", "Broker password");
pub const RABBITMQ_HOST: Variable = text("RABBITMQ_HOST", "rabbitmq", "Broker host");
pub const RABBITMQ_PORT: Variable =
    text("RABBITMQ_PORT", "5672", "Broker port, interpolated into the broker URL as-is");

// Async tasks
pub const CELERY_ENABLED: Variable =
    flag("CELERY_ENABLED", "True", "Dispatch tasks to workers instead of running inline");

// Features
pub const ENABLE_TELEMETRY: Variable = flag("ENABLE_TELEMETRY", "False", "Anonymous telemetry");
pub const PUBLIC_REGISTER_ENABLED: Variable =
    flag("PUBLIC_REGISTER_ENABLED", "False", "Open sign-up");
pub const WEBHOOKS_ENABLED: Variable = flag("WEBHOOKS_ENABLED", "False", "Project webhooks");
pub const FEEDBACK_ENABLED: Variable = flag("FEEDBACK_ENABLED", "False", "In-app feedback form");
pub const FEEDBACK_EMAIL: Variable =
    text("FEEDBACK_EMAIL", "support@example.com", "Feedback recipient");
pub const STATS_ENABLED: Variable = flag("STATS_ENABLED", "False", "Instance statistics");

/// Every recognized variable, grouped as in a deployment's env file
pub const ALL: &[Variable] = &[
    DJANGO_DEBUG,
    POSTGRES_DB,
    POSTGRES_USER,
    POSTGRES_PASSWORD,
    POSTGRES_HOST,
    POSTGRES_PORT,
    TAIGA_SECRET_KEY,
    TAIGA_SITES_SCHEME,
    TAIGA_SITES_DOMAIN,
    FORCE_SCRIPT_NAME,
    MEDIA_ROOT,
    STATIC_ROOT,
    EMAIL_BACKEND,
    DEFAULT_FROM_EMAIL,
    EMAIL_USE_TLS,
    EMAIL_USE_SSL,
    EMAIL_HOST,
    EMAIL_PORT,
    EMAIL_HOST_USER,
    EMAIL_HOST_PASSWORD,
    RABBITMQ_USER,
    RABBITMQ_PASS,
    RABBITMQ_HOST,
    RABBITMQ_PORT,
    CELERY_ENABLED,
    ENABLE_TELEMETRY,
    PUBLIC_REGISTER_ENABLED,
    WEBHOOKS_ENABLED,
    FEEDBACK_ENABLED,
    FEEDBACK_EMAIL,
    STATS_ENABLED,
];

/// Look a variable up by its exact key
pub fn find(key: &str) -> Option<&'static Variable> {
    ALL.iter().find(|v| v.key == key)
}
