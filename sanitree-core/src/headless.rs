// File: sanitree-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot sanitization: parse the definitions, build the
//! registry, run, return the transformed copy.

use std::sync::Arc;

use serde_json::Value;

use crate::engine::sanitize;
use crate::errors::SanitizerError;
use crate::filters::{Filter, FilterRegistry};
use crate::rules::RuleSet;

/// Sanitizes `data` with raw `(path, rule string)` definitions and the built-in filters.
pub fn headless_sanitize<I, K, V>(data: &Value, definitions: I) -> Result<Value, SanitizerError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    headless_sanitize_with_filters(data, definitions, Vec::<(String, Arc<dyn Filter>)>::new())
}

/// Like [`headless_sanitize`], registering `custom_filters` on top of the built-ins first.
/// A custom filter with a built-in's name replaces it.
pub fn headless_sanitize_with_filters<I, K, V, F, N>(
    data: &Value,
    definitions: I,
    custom_filters: F,
) -> Result<Value, SanitizerError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    F: IntoIterator<Item = (N, Arc<dyn Filter>)>,
    N: Into<String>,
{
    let rules = RuleSet::parse(definitions);
    let mut registry = FilterRegistry::default();
    for (name, filter) in custom_filters {
        registry.register_arc(name, filter);
    }
    sanitize(data, &rules, &registry)
}
