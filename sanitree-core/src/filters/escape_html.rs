//! `escape-html`: strips markup tags, then encodes the characters HTML treats as
//! special so the remaining text is safe to embed in a page.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{map_string, Filter};
use crate::errors::SanitizerError;

// Matches an opening or closing tag, comments included. Unterminated `<` is left for
// the entity pass.
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z!?][^>]*>").expect("tag pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeHtml;

fn escape_html(input: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(input, "");
    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Filter for EscapeHtml {
    fn apply(&self, value: Value, _options: &[String]) -> Result<Value, SanitizerError> {
        Ok(map_string(value, escape_html))
    }
}
