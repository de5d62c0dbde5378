// sanitree-core/src/filters/mod.rs
//! Named, pluggable value transformations.
//!
//! Every filter implements the `Filter` trait: it takes ownership of one value plus
//! the option strings from its rule and returns the replacement value. Plain closures
//! of the shape `Fn(Value, &[String]) -> Value` are filters too, which is the easy way
//! to register custom entries.
//!
//! Built-in filters live one per file in this directory and are seeded into every
//! `FilterRegistry::default()`.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::errors::SanitizerError;
use crate::rules::Rule;
use crate::value_log::log_filter_applied_debug;

pub mod capitalize;
pub mod case;
pub mod cast;
pub mod escape_html;
pub mod format_date;
pub mod trim;

/// The contract every filter honours.
pub trait Filter: Send + Sync {
    /// Transforms `value`. `options` are the already-trimmed option strings of the rule.
    fn apply(&self, value: Value, options: &[String]) -> Result<Value, SanitizerError>;
}

impl<F> Filter for F
where
    F: Fn(Value, &[String]) -> Value + Send + Sync,
{
    fn apply(&self, value: Value, options: &[String]) -> Result<Value, SanitizerError> {
        Ok(self(value, options))
    }
}

/// Name of every filter seeded into a default registry.
pub const BUILTIN_FILTERS: [&str; 7] = [
    "capitalize",
    "cast",
    "escape-html",
    "format-date",
    "lowercase",
    "uppercase",
    "trim",
];

/// Mapping from filter name to filter implementation.
#[derive(Clone)]
pub struct FilterRegistry {
    filters: HashMap<String, Arc<dyn Filter>>,
}

impl FilterRegistry {
    /// A registry with no filters at all.
    pub fn empty() -> Self {
        Self { filters: HashMap::new() }
    }

    /// A registry seeded with the built-in filters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("capitalize", capitalize::Capitalize);
        registry.register("cast", cast::Cast);
        registry.register("escape-html", escape_html::EscapeHtml);
        registry.register("format-date", format_date::FormatDate);
        registry.register("lowercase", case::Lowercase);
        registry.register("uppercase", case::Uppercase);
        registry.register("trim", trim::Trim);
        registry
    }

    /// Adds or replaces the filter registered under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, filter: F) -> &mut Self
    where
        F: Filter + 'static,
    {
        self.register_arc(name, Arc::new(filter))
    }

    pub fn register_arc(&mut self, name: impl Into<String>, filter: Arc<dyn Filter>) -> &mut Self {
        let name = name.into();
        if self.filters.insert(name.clone(), filter).is_some() {
            debug!("Filter '{}' overridden by a custom registration.", name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Filter>, SanitizerError> {
        self.filters
            .get(name)
            .cloned()
            .ok_or_else(|| SanitizerError::UnknownFilter(name.to_string()))
    }

    /// Resolves every rule of a chain up front so application cannot hit a missing name.
    pub fn resolve_chain<'r>(&self, rules: &'r [Rule]) -> Result<FilterChain<'r>, SanitizerError> {
        let steps = rules
            .iter()
            .map(|rule| self.lookup(&rule.name).map(|filter| (rule, filter)))
            .collect::<Result<Vec<_>, SanitizerError>>()?;
        Ok(FilterChain { steps })
    }

    /// Sorted names of every registered filter.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .finish()
    }
}

/// A rule chain whose filter names have already been looked up.
pub struct FilterChain<'r> {
    steps: Vec<(&'r Rule, Arc<dyn Filter>)>,
}

impl FilterChain<'_> {
    /// Threads `value` through every filter, left to right.
    pub fn apply(&self, path: &str, mut value: Value) -> Result<Value, SanitizerError> {
        for (rule, filter) in &self.steps {
            if log::log_enabled!(log::Level::Debug) {
                let before = value.clone();
                value = filter.apply(value, &rule.options)?;
                log_filter_applied_debug(path, &rule.name, &before, &value);
            } else {
                value = filter.apply(value, &rule.options)?;
            }
        }
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Applies `f` to string values and passes everything else through unchanged.
pub(crate) fn map_string(value: Value, f: impl FnOnce(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(&s)),
        other => other,
    }
}
