//! `.env` file support
//!
//! Deployments built with docker-compose usually keep their settings in a
//! `.env` file next to the compose file. Reading it lets the tool resolve
//! the same settings the container will see.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Parse a `.env` file into a key-value map
///
/// Later assignments of the same key win. The process environment is not
/// touched; layer the result under it with `LayeredEnvironment`.
pub fn load_env_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read env file {}", path.display()))?;
    debug!(path = %path.display(), "parsing env file");
    Ok(parse_env_content(&content))
}

/// Parse `KEY=value` lines
pub fn parse_env_content(content: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line
            .strip_prefix("export")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map_or(line, str::trim_start);

        let Some((key, value)) = line.split_once('=') else {
            debug!(line = line_num + 1, "skipping line without '='");
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            debug!(line = line_num + 1, "skipping empty key");
            continue;
        }

        vars.insert(key.to_string(), parse_value(value.trim()));
    }

    vars
}

fn parse_value(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        return value[1..value.len() - 1].to_string();
    }
    // An inline comment needs whitespace before '#', so `pa#ss` survives.
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}
