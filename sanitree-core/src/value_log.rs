//! Debug logging helpers for values flowing through filter chains.
//!
//! Sanitized documents usually carry user input, so values are redacted in debug logs
//! unless `SANITREE_ALLOW_DEBUG_VALUES=true` is set.

use log::debug;
use serde_json::Value;

use lazy_static::lazy_static;

lazy_static! {
    /// Read once; whether raw values may appear in debug logs.
    static ref VALUE_DEBUG_ALLOWED: bool = {
        std::env::var("SANITREE_ALLOW_DEBUG_VALUES")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_value(value: &Value) -> String {
    const MAX_LEN: usize = 8;
    match value {
        Value::String(s) if s.chars().count() > MAX_LEN => {
            format!("[REDACTED: {} chars]", s.chars().count())
        }
        Value::Array(items) => format!("[REDACTED: sequence of {}]", items.len()),
        Value::Object(map) => format!("[REDACTED: mapping of {}]", map.len()),
        _ => "[REDACTED]".to_string(),
    }
}

fn get_loggable_value(value: &Value) -> String {
    if *VALUE_DEBUG_ALLOWED {
        value.to_string()
    } else {
        redact_value(value)
    }
}

pub fn log_filter_applied_debug(path: &str, filter: &str, before: &Value, after: &Value) {
    debug!(
        "Path '{}': filter '{}' rewrote {} -> {}",
        path,
        filter,
        get_loggable_value(before),
        get_loggable_value(after)
    );
}
