use jed_core::{parse_root, JedError, Value};

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(parse_root("null").unwrap(), Value::Null);
}

#[test]
fn parse_booleans() {
    assert_eq!(parse_root("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_root("false").unwrap(), Value::Bool(false));
}

#[test]
fn parse_numbers() {
    assert_eq!(parse_root("42").unwrap(), Value::Number(42.0));
    assert_eq!(parse_root("-7").unwrap(), Value::Number(-7.0));
    assert_eq!(parse_root("3.25").unwrap(), Value::Number(3.25));
}

#[test]
fn parse_string_keeps_raw_text() {
    assert_eq!(
        parse_root(r#""a\tb""#).unwrap(),
        Value::String("a\\tb".to_string())
    );
}

#[test]
fn malformed_number_fails_at_conversion() {
    // Lexes as one token, fails when converted to f64.
    let err = parse_root("1.2.3").unwrap_err();
    assert!(matches!(err, JedError::Parse { .. }), "got {err:?}");
    assert!(parse_root("--5").is_err());
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn parse_empty_containers() {
    assert_eq!(parse_root("{}").unwrap(), Value::Object(vec![]));
    assert_eq!(parse_root("[]").unwrap(), Value::Array(vec![]));
}

#[test]
fn parse_object_preserves_insertion_order() {
    let root = parse_root(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
    let Value::Object(entries) = root else {
        panic!("expected object");
    };
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn parse_duplicate_keys_are_representable() {
    let root = parse_root(r#"{"k": 1, "k": 2}"#).unwrap();
    let Value::Object(entries) = &root else {
        panic!("expected object");
    };
    assert_eq!(entries.len(), 2);
    // First-match lookup.
    assert_eq!(root.get("k"), Some(&Value::Number(1.0)));
}

#[test]
fn parse_nested_tree() {
    let root = parse_root(r#"{"a": {"x": 1}, "b": [true, null, "s"]}"#).unwrap();
    assert_eq!(root.get("a").and_then(|a| a.get("x")), Some(&Value::Number(1.0)));
    assert_eq!(
        root.get("b"),
        Some(&Value::Array(vec![
            Value::Bool(true),
            Value::Null,
            Value::String("s".to_string()),
        ]))
    );
}

#[test]
fn parse_failures_are_errors_not_partial_trees() {
    for input in [
        r#"{"a":}"#,
        r#"{"a" 1}"#,
        r#"{1: 2}"#,
        r#"{"a": 1"#,
        "[1, 2",
        "[1,]",
        r#"{"a": 1,}"#,
        "",
    ] {
        assert!(parse_root(input).is_err(), "expected failure for {input:?}");
    }
}

#[test]
fn parse_error_carries_position() {
    let err = parse_root("{\n  \"a\":\n}").unwrap_err();
    match err {
        JedError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn parser_ignores_trailing_content() {
    // Trailing-content rejection belongs to validate(); the builder stops
    // after one complete value.
    assert_eq!(parse_root("{} junk").unwrap(), Value::Object(vec![]));
}

// ============================================================================
// Differential check against serde_json (escape-free inputs only)
// ============================================================================

fn assert_agrees(ours: &Value, theirs: &serde_json::Value) {
    match (ours, theirs) {
        (Value::Null, serde_json::Value::Null) => {}
        (Value::Bool(a), serde_json::Value::Bool(b)) => assert_eq!(a, b),
        (Value::Number(a), serde_json::Value::Number(b)) => {
            assert_eq!(*a, b.as_f64().expect("finite number"));
        }
        (Value::String(a), serde_json::Value::String(b)) => assert_eq!(a, b),
        (Value::Array(a), serde_json::Value::Array(b)) => {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                assert_agrees(x, y);
            }
        }
        (Value::Object(a), serde_json::Value::Object(b)) => {
            assert_eq!(a.len(), b.len());
            // preserve_order keeps serde_json's map in insertion order.
            for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                assert_eq!(ka, kb);
                assert_agrees(va, vb);
            }
        }
        (a, b) => panic!("kind mismatch: {a:?} vs {b:?}"),
    }
}

#[test]
fn agrees_with_serde_json_on_escape_free_documents() {
    for input in [
        "null",
        "true",
        "-12.5",
        r#""plain text""#,
        "[]",
        "{}",
        r#"[1, 2.5, "x", null, false]"#,
        r#"{"name": "demo", "count": 3, "tags": ["a", "b"], "meta": {"ok": true}}"#,
        r#"{"outer": {"inner": [{"deep": [0]}]}}"#,
    ] {
        let ours = parse_root(input).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(input).unwrap();
        assert_agrees(&ours, &theirs);
    }
}
