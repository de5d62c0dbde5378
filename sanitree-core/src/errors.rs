//! errors.rs - Custom error types for the sanitree-core library.
//!
//! Only invalid rule *configuration* is an error. Missing paths, missing branches and
//! empty filter names are all silent no-ops, so nothing in here describes the shape of
//! the data being sanitized.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by the `sanitree-core` engine.
///
/// `#[non_exhaustive]` so new configuration checks can be added without breaking
/// downstream matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SanitizerError {
    /// A rule names a filter that is not present in the registry.
    #[error("No filter found by the name of '{0}'")]
    UnknownFilter(String),

    /// A filter was given options it cannot work with.
    #[error("Filter '{filter}' received invalid options: {reason}")]
    InvalidFilterOptions { filter: String, reason: String },
}

impl SanitizerError {
    pub fn invalid_options(filter: &str, reason: impl Into<String>) -> Self {
        SanitizerError::InvalidFilterOptions {
            filter: filter.to_string(),
            reason: reason.into(),
        }
    }
}
