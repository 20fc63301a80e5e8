//! Shared CLI utilities.

use anyhow::{Context, Result};
use resource_filter::{load_config, Config};
use std::path::Path;

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

pub fn load(path: &Path) -> Result<Config> {
    load_config(path).with_context(|| format!("Could not load rule file {}", path.display()))
}
