//! String-based rule file structure, as written by the user

use crate::config::ConfigError;
use crate::domain::{Config, FilterRule, ResourceCategory, ResourceType, RuleKind};
use regex::Regex;
use serde::{Deserialize, Deserializer};

/// Parsed rule file before any pattern is compiled.
///
/// Unknown top-level keys are ignored. Missing or `null` sections become empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub s3: RawResourceType,
    #[serde(default, rename = "IAMUsers", deserialize_with = "null_as_default")]
    pub iam_users: RawResourceType,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResourceType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub include: RawFilterRule,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclude: RawFilterRule,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterRule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub names_regex: Vec<String>,
}

/// `key:` with no value parses as YAML null; treat it like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawConfig {
    pub fn resource(&self, category: ResourceCategory) -> &RawResourceType {
        match category {
            ResourceCategory::S3 => &self.s3,
            ResourceCategory::IamUsers => &self.iam_users,
        }
    }

    /// Compile every pattern, slot by slot in category order (include before
    /// exclude). The first invalid pattern fails the whole conversion.
    pub fn compile(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        for category in ResourceCategory::ALL {
            *config.resource_mut(category) = self.resource(category).compile(category)?;
        }
        Ok(config)
    }
}

impl RawResourceType {
    pub fn rule(&self, kind: RuleKind) -> &RawFilterRule {
        match kind {
            RuleKind::Include => &self.include,
            RuleKind::Exclude => &self.exclude,
        }
    }

    fn compile(&self, category: ResourceCategory) -> Result<ResourceType, ConfigError> {
        Ok(ResourceType {
            include: self.rule(RuleKind::Include).compile(category, RuleKind::Include)?,
            exclude: self.rule(RuleKind::Exclude).compile(category, RuleKind::Exclude)?,
        })
    }
}

impl RawFilterRule {
    fn compile(&self, category: ResourceCategory, kind: RuleKind) -> Result<FilterRule, ConfigError> {
        let names_regex = self
            .names_regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::Pattern {
                    category,
                    kind,
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FilterRule::new(names_regex))
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        raw.compile()
    }
}
