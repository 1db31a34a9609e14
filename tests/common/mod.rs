//! Common test utilities for integration tests

use std::collections::HashMap;

use taiga_settings::infrastructure::config::variables;

/// Build an injected environment from literal pairs
#[allow(dead_code)]
pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Every recognized variable paired with `None`, for `temp_env` to unset
#[allow(dead_code)]
pub fn all_unset() -> Vec<(&'static str, Option<&'static str>)> {
    variables::ALL.iter().map(|v| (v.key, None)).collect()
}
