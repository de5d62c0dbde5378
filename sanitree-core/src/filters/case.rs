//! `lowercase` and `uppercase`: Unicode case conversion of strings.

use serde_json::Value;

use super::{map_string, Filter};
use crate::errors::SanitizerError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Filter for Lowercase {
    fn apply(&self, value: Value, _options: &[String]) -> Result<Value, SanitizerError> {
        Ok(map_string(value, str::to_lowercase))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Filter for Uppercase {
    fn apply(&self, value: Value, _options: &[String]) -> Result<Value, SanitizerError> {
        Ok(map_string(value, str::to_uppercase))
    }
}
