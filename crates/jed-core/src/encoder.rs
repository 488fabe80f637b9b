//! Canonical serializer.
//!
//! One implementation serves both interactive printing and persistence,
//! so the two are byte-identical. The layout is fixed: 2-space indent
//! per depth level, objects and arrays always multi-line with the
//! closing delimiter at the parent's indent, strings emitted verbatim
//! inside quotes (never re-escaped), and numbers rendered as base-10
//! integers when they have no fractional part. Non-integral numbers use
//! `f64`'s `Display`, the shortest decimal that round-trips to the same
//! value, so output does not vary across platforms.

use std::fmt::Write as _;

use crate::types::Value;

/// Exact f64 integer range: beyond ±2^53 the fractional test is
/// meaningless and the float formatter takes over.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Render a value tree to canonical text.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Array(items) => write_array(items, depth, out),
        Value::Object(entries) => write_object(entries, depth, out),
    }
}

fn write_number(n: f64, out: &mut String) {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        let _ = write!(out, "{}", n as i64);
    } else {
        let _ = write!(out, "{n}");
    }
}

fn write_object(entries: &[(String, Value)], depth: usize, out: &mut String) {
    out.push_str("{\n");
    for (i, (key, value)) in entries.iter().enumerate() {
        push_indent(depth + 2, out);
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
        write_value(value, depth + 2, out);
        if i + 1 < entries.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(depth, out);
    out.push('}');
}

fn write_array(items: &[Value], depth: usize, out: &mut String) {
    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        push_indent(depth + 2, out);
        write_value(item, depth + 2, out);
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(depth, out);
    out.push(']');
}

fn push_indent(width: usize, out: &mut String) {
    for _ in 0..width {
        out.push(' ');
    }
}
