use oxc::syntax::identifier;

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Quotes `value` as a JavaScript string literal.
///
/// JSON strings are a subset of JavaScript string literals since ES2019, so `serde_json` is enough.
pub fn to_js_string_literal(value: &str) -> String {
  serde_json::to_string(value).unwrap_or_else(|_| unreachable!("serializing a str never fails"))
}

/// Renders `key` as an object literal key that always defines an own property, quoting it only
/// when necessary.
pub fn to_property_key(key: &str) -> String {
  if key == "__proto__" {
    // `__proto__: v` and `"__proto__": v` both set the prototype, only a computed key doesn't.
    return "[\"__proto__\"]".to_string();
  }
  if is_validate_identifier_name(key) { key.to_string() } else { to_js_string_literal(key) }
}

/// Returns the length of a leading `#!` line, excluding the line terminator.
pub fn hashbang_len(source: &str) -> Option<usize> {
  if !source.starts_with("#!") {
    return None;
  }
  Some(source.find(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')).unwrap_or(source.len()))
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_to_js_string_literal() {
  assert_eq!(to_js_string_literal("./math"), r#""./math""#);
  assert_eq!(to_js_string_literal("it's \"quoted\""), r#""it's \"quoted\"""#);
  assert_eq!(to_property_key("exports"), "exports");
  assert_eq!(to_property_key("./lib/a.js"), r#""./lib/a.js""#);
  assert_eq!(to_property_key("__proto__"), r#"["__proto__"]"#);
  assert_eq!(to_property_key("constructor"), "constructor");
}

#[test]
fn test_hashbang_len() {
  assert_eq!(hashbang_len("#!/usr/bin/env node\nrequire('./a')"), Some(19));
  assert_eq!(hashbang_len("#!/usr/bin/env node"), Some(19));
  assert_eq!(hashbang_len("// #!/usr/bin/env node"), None);
}
