//! `format-date:<from>,<to>`: re-renders a date string from one chrono strftime
//! pattern to another.
//!
//! The input is tried as an offset-aware datetime, then a naive datetime, then a bare
//! date, all with the `<from>` pattern. Strings that match none of these are left
//! alone; a target pattern that cannot be rendered for the parsed value is a
//! configuration error.

use std::fmt::{Display, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;
use serde_json::Value;

use super::Filter;
use crate::errors::SanitizerError;

const NAME: &str = "format-date";

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDate;

fn render(formatted: impl Display, target: &str) -> Result<String, SanitizerError> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| {
        SanitizerError::invalid_options(
            NAME,
            format!("target format '{}' cannot render the parsed date", target),
        )
    })?;
    Ok(out)
}

fn reformat(input: &str, source: &str, target: &str) -> Option<Result<String, SanitizerError>> {
    if let Ok(dt) = DateTime::parse_from_str(input, source) {
        return Some(render(dt.format(target), target));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, source) {
        return Some(render(dt.format(target), target));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, source) {
        return Some(render(date.format(target), target));
    }
    None
}

impl Filter for FormatDate {
    fn apply(&self, value: Value, options: &[String]) -> Result<Value, SanitizerError> {
        let [source, target] = options else {
            return Err(SanitizerError::invalid_options(
                NAME,
                format!(
                    "expected the current date format and the target format, got {} option(s)",
                    options.len()
                ),
            ));
        };

        let input = match value {
            Value::String(s) => s,
            other => return Ok(other),
        };

        match reformat(&input, source, target) {
            Some(result) => result.map(Value::String),
            None => {
                warn!("Value does not match date format '{}', leaving it unchanged.", source);
                Ok(Value::String(input))
            }
        }
    }
}
