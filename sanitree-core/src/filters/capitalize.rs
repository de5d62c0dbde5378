//! `capitalize`: lowercases a string and uppercases its first character.

use serde_json::Value;

use super::{map_string, Filter};
use crate::errors::SanitizerError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Capitalize;

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Filter for Capitalize {
    fn apply(&self, value: Value, _options: &[String]) -> Result<Value, SanitizerError> {
        Ok(map_string(value, capitalize))
    }
}
