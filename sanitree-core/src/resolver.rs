//! resolver.rs - Locates every value a rule path designates and rewrites it in place.
//!
//! The resolver only ever works on the engine's owned working copy. Matched values are
//! moved out of the tree, threaded through the path's `FilterChain`, and written back,
//! so siblings are processed independently and nothing is aliased.
//!
//! Resolution is presence based: a value is sanitized when its key exists (or its index
//! is in range), whatever it holds. Missing keys and branches that cannot be descended
//! into are silent no-ops; the resolver never creates structure.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_json::Value;

use crate::errors::SanitizerError;
use crate::filters::FilterChain;
use crate::path::{child_mut, Path, Segment};

/// Moves `slot`'s value through the chain and stores the result back.
fn rewrite(slot: &mut Value, path: &Path, chain: &FilterChain<'_>) -> Result<(), SanitizerError> {
    let current = std::mem::take(slot);
    *slot = chain.apply(path.as_str(), current)?;
    Ok(())
}

/// Every direct child of a container; empty for scalars.
fn children_mut(node: &mut Value) -> Box<dyn Iterator<Item = &mut Value> + '_> {
    match node {
        Value::Array(items) => Box::new(items.iter_mut()),
        Value::Object(map) => Box::new(map.values_mut()),
        _ => Box::new(std::iter::empty()),
    }
}

/// Resolves a path without wildcards by plain nested lookup.
///
/// Returns the number of values rewritten (zero or one).
pub fn resolve_direct(
    root: &mut Value,
    path: &Path,
    chain: &FilterChain<'_>,
) -> Result<usize, SanitizerError> {
    if path.has_wildcard() {
        debug!("Path '{}' contains a wildcard, delegating to the walker.", path);
        return resolve_wildcard(root, path, chain);
    }

    match lookup_mut(root, path.segments()) {
        Some(node) => {
            rewrite(node, path, chain)?;
            Ok(1)
        }
        None => {
            debug!("Path '{}' not present in data, skipping.", path);
            Ok(0)
        }
    }
}

fn lookup_mut<'a>(root: &'a mut Value, segments: &[Segment]) -> Option<&'a mut Value> {
    segments.iter().try_fold(root, |node, segment| match segment {
        Segment::Literal(key) => child_mut(node, key),
        Segment::Wildcard => None,
    })
}

/// Resolves a path containing wildcard segments, fanning out at every `*`.
///
/// Returns the number of values rewritten across all matched branches.
pub fn resolve_wildcard(
    root: &mut Value,
    path: &Path,
    chain: &FilterChain<'_>,
) -> Result<usize, SanitizerError> {
    let rewritten = walk(root, path.segments(), path, chain)?;
    debug!("Path '{}' rewrote {} value(s).", path, rewritten);
    Ok(rewritten)
}

fn walk(
    node: &mut Value,
    segments: &[Segment],
    path: &Path,
    chain: &FilterChain<'_>,
) -> Result<usize, SanitizerError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(0);
    };

    match (segment, rest.is_empty()) {
        // Trailing wildcard: only string elements are direct matches.
        (Segment::Wildcard, true) => {
            let mut count = 0;
            for child in children_mut(node).filter(|c| c.is_string()) {
                rewrite(child, path, chain)?;
                count += 1;
            }
            Ok(count)
        }
        (Segment::Wildcard, false) => {
            let mut count = 0;
            for child in children_mut(node) {
                count += walk(child, rest, path, chain)?;
            }
            Ok(count)
        }
        (Segment::Literal(key), true) => match child_mut(node, key) {
            Some(child) => {
                rewrite(child, path, chain)?;
                Ok(1)
            }
            None => Ok(0),
        },
        (Segment::Literal(key), false) => match child_mut(node, key) {
            Some(child) if child.is_array() || child.is_object() => walk(child, rest, path, chain),
            _ => Ok(0),
        },
    }
}
