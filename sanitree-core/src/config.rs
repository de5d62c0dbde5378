//! Configuration management for `sanitree-core`.
//!
//! Rule definitions are kept in the order they were written, since rule paths are
//! applied in declaration order. Files are read with `serde_yml`, which also accepts
//! the JSON form of the same document:
//!
//! ```yaml
//! rules:
//!   name: "trim|capitalize"
//!   items.*.published: "format-date:%d/%m/%Y, %Y-%m-%d"
//! ```
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::rules::RuleSet;

/// Ordered `(path, rule string)` pairs, the raw form consumed by the parser.
///
/// A path appears at most once. When a document repeats a key, the later rule string
/// wins and the path keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrderedRuleMap", into = "OrderedRuleMap")]
pub struct RuleDefinitions(Vec<(String, String)>);

/// Wire form of `RuleDefinitions`: the mapping exactly as written, repeats included.
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct OrderedRuleMap(#[serde_as(as = "serde_with::Map<_, _>")] Vec<(String, String)>);

impl From<OrderedRuleMap> for RuleDefinitions {
    fn from(map: OrderedRuleMap) -> Self {
        let written = map.0.len();
        let defs: RuleDefinitions = map.0.into_iter().collect();
        if defs.len() < written {
            debug!(
                "Collapsed {} repeated rule path(s) in rules document.",
                written - defs.len()
            );
        }
        defs
    }
}

impl From<RuleDefinitions> for OrderedRuleMap {
    fn from(defs: RuleDefinitions) -> Self {
        OrderedRuleMap(defs.0)
    }
}

impl RuleDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule string for `path`. An existing path keeps its position.
    pub fn insert(&mut self, path: impl Into<String>, rules: impl Into<String>) -> &mut Self {
        let path = path.into();
        let rules = rules.into();
        match self.0.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = rules,
            None => self.0.push((path, rules)),
        }
        self
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.iter().find(|(p, _)| p == path).map(|(_, r)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    /// Parses the definitions into a `RuleSet`.
    pub fn parse(&self) -> RuleSet {
        RuleSet::parse(self.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for RuleDefinitions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut defs = RuleDefinitions::new();
        for (path, rules) in iter {
            defs.insert(path, rules);
        }
        defs
    }
}

/// The top-level structure of a rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: RuleDefinitions,
}

impl RulesConfig {
    /// Loads rule definitions from a YAML (or JSON) file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse rules file {}", path.display()))?;

        info!("Loaded {} rule path(s) from file {}.", config.rules.len(), path.display());
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: RulesConfig = serde_yml::from_str(text).context("Invalid rules document")?;
        debug!("Parsed rules document with {} path(s).", config.rules.len());
        Ok(config)
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rules.parse()
    }
}
