// sanitree-core/src/engine.rs
//! The sanitization orchestrator.
//!
//! A run clones the caller's document into a working copy, walks the `RuleSet` in
//! declaration order, and hands each path to the resolver. Later paths see the results
//! of earlier ones because they all mutate the same working copy. The caller's document
//! is only ever borrowed immutably.
//!
//! Every chain is resolved against the `FilterRegistry` before the first path is
//! walked, so a rule naming an unknown filter aborts the run up front, whether or not
//! its path matches anything in the data.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde_json::Value;

use crate::errors::SanitizerError;
use crate::filters::{FilterChain, FilterRegistry};
use crate::path::Path;
use crate::resolver::{resolve_direct, resolve_wildcard};
use crate::rules::RuleSet;

/// How many values one path rewrote during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeSummaryItem {
    pub path: String,
    pub rewritten: usize,
}

/// Sanitizes `data` with `rules`, returning the transformed copy.
pub fn sanitize(
    data: &Value,
    rules: &RuleSet,
    registry: &FilterRegistry,
) -> Result<Value, SanitizerError> {
    sanitize_with_summary(data, rules, registry).map(|(value, _)| value)
}

/// Like [`sanitize`], also reporting how many values each path rewrote.
pub fn sanitize_with_summary(
    data: &Value,
    rules: &RuleSet,
    registry: &FilterRegistry,
) -> Result<(Value, Vec<SanitizeSummaryItem>), SanitizerError> {
    debug!("Starting sanitization run over {} path(s).", rules.len());

    let chains: Vec<(&Path, FilterChain<'_>)> = rules
        .entries()
        .iter()
        .map(|entry| registry.resolve_chain(&entry.rules).map(|chain| (&entry.path, chain)))
        .collect::<Result<_, SanitizerError>>()?;

    let mut working = data.clone();
    let mut summary = Vec::with_capacity(chains.len());

    for (path, chain) in &chains {
        let rewritten = if path.has_wildcard() {
            resolve_wildcard(&mut working, path, chain)?
        } else {
            resolve_direct(&mut working, path, chain)?
        };
        summary.push(SanitizeSummaryItem {
            path: path.to_string(),
            rewritten,
        });
    }

    let total: usize = summary.iter().map(|s| s.rewritten).sum();
    info!(
        "Sanitization run finished: {} value(s) rewritten across {} path(s).",
        total,
        summary.len()
    );
    Ok((working, summary))
}

/// A parsed rule set bundled with the registry it runs against.
///
/// Build it once, then call [`Sanitizer::sanitize`] for as many documents as needed.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    rules: RuleSet,
    registry: FilterRegistry,
}

impl Sanitizer {
    /// Uses the default registry of built-in filters.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_registry(rules, FilterRegistry::default())
    }

    pub fn with_registry(rules: RuleSet, registry: FilterRegistry) -> Self {
        Self { rules, registry }
    }

    /// Parses `(path, rule string)` definitions with the default registry.
    pub fn from_definitions<I, K, V>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::new(RuleSet::parse(definitions))
    }

    /// Mutable access to the registry for custom filter registration before a run.
    pub fn registry_mut(&mut self) -> &mut FilterRegistry {
        &mut self.registry
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn sanitize(&self, data: &Value) -> Result<Value, SanitizerError> {
        sanitize(data, &self.rules, &self.registry)
    }

    pub fn sanitize_with_summary(
        &self,
        data: &Value,
    ) -> Result<(Value, Vec<SanitizeSummaryItem>), SanitizerError> {
        sanitize_with_summary(data, &self.rules, &self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_counts_per_path() {
        let sanitizer = Sanitizer::from_definitions([
            ("items.*.name", "trim"),
            ("missing", "trim"),
            ("title", "uppercase"),
        ]);
        let data = json!({ "title": "t", "items": [{ "name": " a " }, { "name": " b " }] });

        let (out, summary) = sanitizer.sanitize_with_summary(&data).unwrap();
        assert_eq!(out["items"][1]["name"], json!("b"));
        assert_eq!(
            summary,
            vec![
                SanitizeSummaryItem {
                    path: "items.*.name".to_string(),
                    rewritten: 2,
                },
                SanitizeSummaryItem {
                    path: "missing".to_string(),
                    rewritten: 0,
                },
                SanitizeSummaryItem {
                    path: "title".to_string(),
                    rewritten: 1,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_filter_aborts_before_any_path_runs() {
        let sanitizer = Sanitizer::from_definitions([("a", "trim"), ("b", "no-such-filter")]);
        let err = sanitizer.sanitize(&json!({ "a": " x " })).err().unwrap();
        assert_eq!(err, SanitizerError::UnknownFilter("no-such-filter".to_string()));
    }

    #[test]
    fn test_later_paths_see_earlier_results() {
        let mut sanitizer = Sanitizer::from_definitions([("list.*", "trim"), ("list.0", "tag")]);
        sanitizer
            .registry_mut()
            .register("tag", |v: Value, _: &[String]| {
                json!(format!("<{}>", v.as_str().unwrap_or("")))
            });

        let out = sanitizer.sanitize(&json!({ "list": [" a ", " b "] })).unwrap();
        assert_eq!(out, json!({ "list": ["<a>", "b"] }));
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let data = json!({ "a": [1, { "b": " c " }] });
        let out = Sanitizer::default().sanitize(&data).unwrap();
        assert_eq!(out, data);
    }
}
