//! resource-filter: include/exclude name rules for cloud resources
//!
//! Load a YAML rule file once with [`load_config`], then ask
//! [`Config::should_include`] (or [`should_include`] directly) for each
//! discovered resource name.

pub mod config;
pub mod domain;
pub mod filter;

pub use config::{load_config, ConfigError};
pub use domain::{Config, FilterRule, ResourceCategory, ResourceType, RuleKind};
pub use filter::should_include;
