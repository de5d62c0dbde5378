//! `trim`: strips leading and trailing whitespace from strings.

use serde_json::Value;

use super::{map_string, Filter};
use crate::errors::SanitizerError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl Filter for Trim {
    fn apply(&self, value: Value, _options: &[String]) -> Result<Value, SanitizerError> {
        Ok(map_string(value, |s| s.trim().to_string()))
    }
}
