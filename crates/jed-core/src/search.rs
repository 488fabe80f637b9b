//! Key search and containment queries over a value tree.
//!
//! Both traversals are stateless depth-first walks in insertion order.
//! `search_by_key` collects every object entry whose key matches, in
//! pre-order encounter order, and keeps descending into matched
//! containers so their descendants are searched too. Arrays are walked
//! element-wise but never matched directly. `contains` short-circuits on
//! the first leaf hit.

use crate::types::Value;

/// Collect references to every value stored under `key`, anywhere in the
/// tree. Returns an empty vector when nothing matches.
pub fn search_by_key<'a>(root: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut results = Vec::new();
    collect(root, key, &mut results);
    results
}

fn collect<'a>(node: &'a Value, key: &str, results: &mut Vec<&'a Value>) {
    match node {
        Value::Object(entries) => {
            for (k, v) in entries {
                if k == key {
                    results.push(v);
                }
                collect(v, key, results);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, key, results);
            }
        }
        _ => {}
    }
}

/// Does any leaf of the tree match `literal`?
///
/// Strings match on substring, numbers on exact equality with the
/// literal parsed as `f64`, booleans on exact `"true"`/`"false"` text,
/// and null never matches.
pub fn contains(root: &Value, literal: &str) -> bool {
    match root {
        Value::String(s) => s.contains(literal),
        Value::Number(n) => literal.parse::<f64>().is_ok_and(|v| v == *n),
        Value::Bool(b) => literal == if *b { "true" } else { "false" },
        Value::Null => false,
        Value::Array(items) => items.iter().any(|v| contains(v, literal)),
        Value::Object(entries) => entries.iter().any(|(_, v)| contains(v, literal)),
    }
}
