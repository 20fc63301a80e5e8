//! Core configuration types
//!
//! `Config` is the compiled, immutable form of a rule file. Every `Regex`
//! reachable from it compiled successfully; see [`crate::config::raw`] for the
//! string-based form the YAML parser produces.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A class of managed resource with its own include/exclude rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceCategory {
    #[serde(rename = "s3")]
    S3,
    #[serde(rename = "IAMUsers")]
    IamUsers,
}

impl ResourceCategory {
    /// All categories, in the order their rules are compiled.
    pub const ALL: [ResourceCategory; 2] = [ResourceCategory::S3, ResourceCategory::IamUsers];

    /// Top-level key used for this category in the rule file.
    pub fn key(self) -> &'static str {
        match self {
            ResourceCategory::S3 => "s3",
            ResourceCategory::IamUsers => "IAMUsers",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceCategory::ALL.into_iter().find(|c| c.key() == s).ok_or_else(|| {
            let known: Vec<&str> = ResourceCategory::ALL.iter().map(|c| c.key()).collect();
            format!("Unknown resource category '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

/// Which half of a category's rule pair a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Include,
    Exclude,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Include => f.write_str("include"),
            RuleKind::Exclude => f.write_str("exclude"),
        }
    }
}

/// Compiled name patterns for one rule.
#[derive(Debug, Clone, Default)]
pub struct FilterRule {
    pub names_regex: Vec<Regex>,
}

impl FilterRule {
    pub fn new(names_regex: Vec<Regex>) -> Self {
        Self { names_regex }
    }

    /// True if any pattern finds a match in `name`. An empty rule matches nothing.
    pub fn matches(&self, name: &str) -> bool {
        crate::filter::matches_any(name, &self.names_regex)
    }

    pub fn is_empty(&self) -> bool {
        self.names_regex.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names_regex.len()
    }
}

/// Include/exclude rule pair for a single resource category.
#[derive(Debug, Clone, Default)]
pub struct ResourceType {
    pub include: FilterRule,
    pub exclude: FilterRule,
}

impl ResourceType {
    pub fn rule(&self, kind: RuleKind) -> &FilterRule {
        match kind {
            RuleKind::Include => &self.include,
            RuleKind::Exclude => &self.exclude,
        }
    }

    /// Inclusion decision for `name` under this category's rules.
    pub fn should_include(&self, name: &str) -> bool {
        crate::filter::should_include(
            name,
            &self.include.names_regex,
            &self.exclude.names_regex,
        )
    }
}

/// Compiled rule file. An empty config allows every name.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub s3: ResourceType,
    pub iam_users: ResourceType,
}

impl Config {
    pub fn resource(&self, category: ResourceCategory) -> &ResourceType {
        match category {
            ResourceCategory::S3 => &self.s3,
            ResourceCategory::IamUsers => &self.iam_users,
        }
    }

    pub(crate) fn resource_mut(&mut self, category: ResourceCategory) -> &mut ResourceType {
        match category {
            ResourceCategory::S3 => &mut self.s3,
            ResourceCategory::IamUsers => &mut self.iam_users,
        }
    }

    pub fn should_include(&self, category: ResourceCategory, name: &str) -> bool {
        self.resource(category).should_include(name)
    }
}
