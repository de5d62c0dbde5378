//! Dotted rule paths.
//!
//! A path such as `items.*.tags.*` is split on `.` into segments. The segment `*` is
//! the wildcard and matches every element of a sequence or every value of a mapping
//! at its depth; anything else is a literal key (or a sequence index when it parses as
//! an unsigned integer).

use std::fmt;

use serde_json::Value;

/// The token that marks a wildcard segment.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Wildcard,
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Literal(raw.to_string())
        }
    }
}

/// A parsed rule path. Keeps its original string form for display and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    raw: String,
    segments: Vec<Segment>,
}

impl Path {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(Segment::parse).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Wildcard))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Looks up a literal segment in a container.
///
/// Mappings are matched by key, sequences by index. Scalars never have children.
pub(crate) fn child_mut<'a>(node: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}
