//! Path-addressed resolution and mutation over a [`Value`] tree.
//!
//! Paths are `/`-separated; empty segments (leading, trailing, doubled
//! separators) are dropped rather than rejected. At an object node a
//! segment must equal an existing key (first match when duplicated); at
//! an array node it must parse as an in-bounds base-10 index. A path
//! whose split yields no segments never addresses the root for mutation.
//!
//! Mutations leave the tree unchanged on failure. Replacement literals
//! are parsed before the tree is touched, and the intermediate-container
//! walk of `create`/`move` can only fail while still inside pre-existing
//! nodes: once the first auto-created object appears, every remaining
//! step lands in a fresh empty object and cannot fail. `move_value`
//! additionally restores a detached node at its original position when
//! the attach side fails.
//!
//! Array containers are never auto-created, and `delete` requires an
//! object parent — array elements cannot be deleted through this engine.

use crate::error::{JedError, Result};
use crate::parser::parse_root;
use crate::types::Value;

/// Split a path on `/`, dropping empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn path_error(path: &str, reason: String) -> JedError {
    JedError::Path {
        path: path.to_string(),
        reason,
    }
}

fn mutation_error(path: &str, reason: String) -> JedError {
    JedError::Mutation {
        path: path.to_string(),
        reason,
    }
}

fn descend<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(entries) => entries.iter().find(|(k, _)| k == segment).map(|(_, v)| v),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn descend_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(entries) => entries
            .iter_mut()
            .find(|(k, _)| k == segment)
            .map(|(_, v)| v),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

/// Resolve `path` to a node reference.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let segments = split_path(path);
    if segments.is_empty() {
        return Err(path_error(path, "empty path".to_string()));
    }
    let mut current = root;
    for segment in &segments {
        current = descend(current, segment)
            .ok_or_else(|| path_error(path, format!("no element at segment '{segment}'")))?;
    }
    Ok(current)
}

fn resolve_mut<'a>(root: &'a mut Value, segments: &[&str], path: &str) -> Result<&'a mut Value> {
    let mut current = root;
    for segment in segments {
        current = descend_mut(current, segment)
            .ok_or_else(|| path_error(path, format!("no element at segment '{segment}'")))?;
    }
    Ok(current)
}

/// Descend one segment, materializing an empty object for a missing key.
/// Arrays are indexed but never created; a bad index fails here, even
/// under `create`.
fn descend_or_create<'a>(node: &'a mut Value, segment: &str, path: &str) -> Result<&'a mut Value> {
    match node {
        Value::Object(entries) => {
            if let Some(i) = entries.iter().position(|(k, _)| k == segment) {
                Ok(&mut entries[i].1)
            } else {
                entries.push((segment.to_string(), Value::Object(Vec::new())));
                let end = entries.len() - 1;
                Ok(&mut entries[end].1)
            }
        }
        Value::Array(items) => {
            let idx = segment
                .parse::<usize>()
                .ok()
                .filter(|i| *i < items.len())
                .ok_or_else(|| {
                    path_error(path, format!("invalid or out-of-range array index '{segment}'"))
                })?;
            Ok(&mut items[idx])
        }
        other => Err(path_error(
            path,
            format!("segment '{segment}' addresses a {}", other.kind()),
        )),
    }
}

/// Replace the existing node at `path` with the parsed `literal`.
pub fn set(root: &mut Value, path: &str, literal: &str) -> Result<()> {
    let segments = split_path(path);
    let Some((last, prefix)) = segments.split_last() else {
        return Err(path_error(path, "empty path".to_string()));
    };
    let new_value = parse_root(literal)?;
    let parent = resolve_mut(root, prefix, path)?;
    let slot = descend_mut(parent, last)
        .ok_or_else(|| path_error(path, format!("no element at segment '{last}'")))?;
    // The old subtree is dropped by the assignment.
    *slot = new_value;
    Ok(())
}

/// Insert the parsed `literal` at `path`, whose final segment must be a
/// new key. Missing intermediate object keys are materialized as empty
/// objects.
pub fn create(root: &mut Value, path: &str, literal: &str) -> Result<()> {
    let segments = split_path(path);
    let Some((last, prefix)) = segments.split_last() else {
        return Err(path_error(path, "empty path".to_string()));
    };
    // Parsed up front: a bad literal must not leave containers behind.
    let new_value = parse_root(literal)?;
    let mut current = root;
    for segment in prefix {
        current = descend_or_create(current, segment, path)?;
    }
    let entries = match current {
        Value::Object(entries) => entries,
        other => {
            return Err(mutation_error(
                path,
                format!("parent is a {}, not an object", other.kind()),
            ))
        }
    };
    if entries.iter().any(|(k, _)| k == last) {
        return Err(mutation_error(path, format!("key '{last}' already exists")));
    }
    entries.push((last.to_string(), new_value));
    Ok(())
}

/// Remove the entry named by the final segment of `path`. The parent
/// must be an object.
pub fn delete(root: &mut Value, path: &str) -> Result<()> {
    let segments = split_path(path);
    let Some((last, prefix)) = segments.split_last() else {
        return Err(path_error(path, "empty path".to_string()));
    };
    let entries = match resolve_mut(root, prefix, path)? {
        Value::Object(entries) => entries,
        other => {
            return Err(mutation_error(
                path,
                format!("parent is a {}, not an object", other.kind()),
            ))
        }
    };
    let Some(idx) = entries.iter().position(|(k, _)| k == *last) else {
        return Err(path_error(path, format!("key '{last}' not found")));
    };
    // Dropping the removed pair releases the whole subtree.
    entries.remove(idx);
    Ok(())
}

/// Detach the node at `from` and re-attach it at `to`, overwriting any
/// existing entry there. Ownership transfers; the node is never cloned.
pub fn move_value(root: &mut Value, from: &str, to: &str) -> Result<()> {
    let from_segments = split_path(from);
    let Some((from_last, from_prefix)) = from_segments.split_last() else {
        return Err(path_error(from, "empty path".to_string()));
    };
    let to_segments = split_path(to);
    if to_segments.is_empty() {
        return Err(path_error(to, "empty path".to_string()));
    }

    let from_entries = match resolve_mut(root, from_prefix, from)? {
        Value::Object(entries) => entries,
        other => {
            return Err(mutation_error(
                from,
                format!("parent is a {}, not an object", other.kind()),
            ))
        }
    };
    let Some(idx) = from_entries.iter().position(|(k, _)| k == *from_last) else {
        return Err(path_error(from, format!("key '{from_last}' not found")));
    };
    let (key, node) = from_entries.remove(idx);

    match attach(root, &to_segments, to, node) {
        Ok(()) => Ok(()),
        Err((err, node)) => {
            // Attach fails only before it creates anything, so the from
            // parent is untouched and still resolves; slot the node back
            // where it was.
            if let Ok(Value::Object(entries)) = resolve_mut(root, from_prefix, from) {
                entries.insert(idx, (key, node));
            }
            Err(err)
        }
    }
}

/// Attach `node` at the path given by `segments`, auto-creating missing
/// intermediate object keys. On failure the node is handed back to the
/// caller for restoration.
fn attach(
    root: &mut Value,
    segments: &[&str],
    path: &str,
    node: Value,
) -> std::result::Result<(), (JedError, Value)> {
    let Some((last, prefix)) = segments.split_last() else {
        return Err((path_error(path, "empty path".to_string()), node));
    };
    let mut current = root;
    for segment in prefix {
        current = match descend_or_create(current, segment, path) {
            Ok(next) => next,
            Err(err) => return Err((err, node)),
        };
    }
    let entries = match current {
        Value::Object(entries) => entries,
        other => {
            let err = mutation_error(path, format!("parent is a {}, not an object", other.kind()));
            return Err((err, node));
        }
    };
    match entries.iter().position(|(k, _)| k == *last) {
        // Overwrite drops the previous subtree.
        Some(i) => entries[i].1 = node,
        None => entries.push((last.to_string(), node)),
    }
    Ok(())
}
