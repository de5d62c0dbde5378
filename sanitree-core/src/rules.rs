//! rules.rs - Parses rule definitions into an ordered `RuleSet`.
//!
//! A rule definition maps a dotted path to a pipe-delimited rule string:
//!
//! ```text
//! "items.*.published" => "trim|format-date:%Y-%m-%d, %d/%m/%Y"
//! ```
//!
//! Each pipe segment is one `Rule`. Everything after the first `:` is the options blob,
//! split on `,` with each option trimmed. Segments with an empty filter name are dropped.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};

use crate::path::Path;

/// A single filter invocation: the filter's name and its ordered option strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parses one rule token such as `cast:int` or `format-date:%Y, %d`.
///
/// Returns `None` when the token carries no filter name.
pub fn parse_rule_string(token: &str) -> Option<Rule> {
    let (name, options) = match token.split_once(':') {
        Some((name, blob)) => (
            name,
            blob.split(',').map(|opt| opt.trim().to_string()).collect(),
        ),
        None => (token, Vec::new()),
    };

    if name.is_empty() {
        return None;
    }

    Some(Rule {
        name: name.to_string(),
        options,
    })
}

/// Parses a full pipe-delimited rule string into its chain, dropping empty names.
pub fn parse_rule_chain(rule_string: &str) -> Vec<Rule> {
    rule_string.split('|').filter_map(parse_rule_string).collect()
}

/// One path together with the chain of rules that applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub path: Path,
    pub rules: Vec<Rule>,
}

/// The parsed, ordered mapping from path to rule chain driving one sanitization run.
///
/// Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    /// Parses `(path, rule string)` pairs, in order.
    ///
    /// Paths whose rule string yields no valid rule are left out. When the same path is
    /// declared twice the later declaration replaces the earlier one in place.
    pub fn parse<I, K, V>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries: Vec<RuleEntry> = Vec::new();

        for (raw_path, rule_string) in definitions {
            let raw_path = raw_path.as_ref();
            let rules = parse_rule_chain(rule_string.as_ref());
            let existing = entries.iter().position(|e| e.path.as_str() == raw_path);

            match (existing, rules.is_empty()) {
                (Some(idx), true) => {
                    entries.remove(idx);
                }
                (Some(idx), false) => entries[idx].rules = rules,
                (None, true) => {
                    debug!("Path '{}' has no valid rules, skipping.", raw_path);
                }
                (None, false) => entries.push(RuleEntry {
                    path: Path::parse(raw_path),
                    rules,
                }),
            }
        }

        debug!("Parsed rule set with {} path(s).", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Returns the chain declared for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&[Rule]> {
        self.entries
            .iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| e.rules.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
