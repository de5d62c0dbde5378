// sanitree-core/src/lib.rs
//! # sanitree Core Library
//!
//! `sanitree-core` rewrites values inside nested documents (the kind produced by
//! decoding JSON or form submissions) according to a declarative rule set. Each rule
//! maps a dotted *path* to an ordered chain of named *filters*:
//!
//! ```text
//! "name"                 => "trim|capitalize"
//! "items.*.price"        => "cast:float"
//! "items.*.tags.*"       => "trim|lowercase"
//! ```
//!
//! It never validates or rejects data. Values that no path reaches are returned as
//! they were, and paths that do not exist in a document are simply skipped.
//!
//! ## Modules
//!
//! * `rules`: Parses rule strings into an ordered `RuleSet`.
//! * `path`: Dotted paths and their wildcard segments.
//! * `resolver`: Finds every value a path designates and rewrites it.
//! * `engine`: The orchestrator driving a full run, plus the reusable `Sanitizer`.
//! * `filters`: The `Filter` trait, the `FilterRegistry`, and the built-in filters.
//! * `config`: Ordered rule definitions and the YAML/JSON rules file loader.
//! * `headless`: One-shot convenience wrappers.
//! * `value_log`: Debug logging of matched values, redacted by default.
//!
//! ## Usage Example
//!
//! ```rust
//! use sanitree_core::{Sanitizer, SanitizerError};
//! use serde_json::json;
//!
//! fn main() -> Result<(), SanitizerError> {
//!     let sanitizer = Sanitizer::from_definitions([
//!         ("name", "trim|capitalize"),
//!         ("items.*.sku", "trim|uppercase"),
//!     ]);
//!
//!     let input = json!({
//!         "name": "  hello world   ",
//!         "items": [{ "sku": " ab-1 " }, { "qty": 2 }],
//!     });
//!
//!     let output = sanitizer.sanitize(&input)?;
//!     assert_eq!(output["name"], json!("Hello world"));
//!     assert_eq!(output["items"][0]["sku"], json!("AB-1"));
//!     assert_eq!(output["items"][1], json!({ "qty": 2 }));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only invalid rule configuration fails a run: a rule naming a filter the registry
//! does not know (`SanitizerError::UnknownFilter`) or a built-in filter given unusable
//! options (`SanitizerError::InvalidFilterOptions`). Loading rules files returns
//! `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod filters;
pub mod headless;
pub mod path;
pub mod resolver;
pub mod rules;
pub mod value_log;

/// Re-exports the rules file types.
pub use config::{RuleDefinitions, RulesConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SanitizerError;

/// Re-exports the orchestrator entry points.
pub use engine::{sanitize, sanitize_with_summary, SanitizeSummaryItem, Sanitizer};

/// Re-exports the filter contract and registry.
pub use filters::{Filter, FilterChain, FilterRegistry, BUILTIN_FILTERS};

/// Re-exports types and functions for one-shot use.
pub use headless::{headless_sanitize, headless_sanitize_with_filters};

pub use path::{Path, Segment, WILDCARD};
pub use rules::{parse_rule_chain, parse_rule_string, Rule, RuleEntry, RuleSet};
