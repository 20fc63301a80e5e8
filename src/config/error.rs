//! Rule file loading errors

use crate::domain::{ResourceCategory, RuleKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot resolve config path '{}': {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid pattern '{pattern}' in {category}.{kind}.names_regex: {source}")]
    Pattern {
        category: ResourceCategory,
        kind: RuleKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
