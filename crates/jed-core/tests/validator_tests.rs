use jed_core::validate;

// ============================================================================
// Valid documents
// ============================================================================

#[test]
fn valid_primitives() {
    assert!(validate("null"));
    assert!(validate("true"));
    assert!(validate("false"));
    assert!(validate("42"));
    assert!(validate("-3.5"));
    assert!(validate(r#""hello""#));
}

#[test]
fn valid_empty_containers() {
    assert!(validate("{}"));
    assert!(validate("[]"));
    assert!(validate(r#"{"a": {}}"#));
    assert!(validate(r#"[[], {}]"#));
}

#[test]
fn valid_nested_document() {
    assert!(validate(
        r#"{
  "name": "demo",
  "tags": ["a", "b"],
  "nested": {"deep": [1, {"x": null}]}
}"#
    ));
}

#[test]
fn whitespace_is_insignificant() {
    assert!(validate("  {  \"a\" : [ 1 , 2 ]  }  "));
}

// ============================================================================
// Invalid documents — every outcome is a plain false, never a panic
// ============================================================================

#[test]
fn missing_value_after_colon() {
    assert!(!validate(r#"{"a":}"#));
}

#[test]
fn missing_colon() {
    assert!(!validate(r#"{"a" 1}"#));
}

#[test]
fn non_string_key() {
    assert!(!validate(r#"{1: 2}"#));
}

#[test]
fn missing_closing_brace() {
    assert!(!validate(r#"{"a": 1"#));
}

#[test]
fn missing_closing_bracket() {
    assert!(!validate("[1, 2"));
}

#[test]
fn missing_separator() {
    assert!(!validate(r#"{"a": 1 "b": 2}"#));
    assert!(!validate("[1 2]"));
}

#[test]
fn trailing_comma() {
    assert!(!validate(r#"{"a": 1,}"#));
    assert!(!validate("[1,]"));
}

#[test]
fn trailing_content_is_rejected() {
    assert!(!validate("{} {}"));
    assert!(!validate("1 2"));
    assert!(!validate(r#"{"a": 1} x"#));
}

#[test]
fn lex_failures_surface_as_invalid() {
    assert!(!validate("@"));
    assert!(!validate("\"unterminated"));
    assert!(!validate("nul"));
}

#[test]
fn empty_input_is_invalid() {
    assert!(!validate(""));
    assert!(!validate("   "));
}

#[test]
fn malformed_number_still_validates() {
    // The grammar pass accepts any number token; only tree building
    // converts to f64 and can reject it.
    assert!(validate("1.2.3"));
}
