//! Small helpers shared by the source adapters for turning optional provider
//! fields into display strings.
//!
//! Providers send empty strings, zeroes and nulls interchangeably for "no
//! value", so all of them count as absent here.

use serde_json::Value;

pub const UNKNOWN_PRODUCT: &str = "Unidentified product";
pub const UNKNOWN_BOOK: &str = "Unidentified book";
pub const UNKNOWN_BRAND: &str = "Unspecified brand";
pub const UNKNOWN_PUBLISHER: &str = "Unspecified publisher";
pub const UNKNOWN_CATEGORY: &str = "Unspecified category";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
pub const BOOK_CATEGORY: &str = "Book";
pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_AVAILABLE: &str = "Not available";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_RATED: &str = "Not rated";

/// The value if present and non-blank, else `fallback`.
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

/// The value if present and non-blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Join non-blank items with `", "`, or `fallback` if there are none.
pub fn join_or<'a>(items: impl IntoIterator<Item = &'a str>, fallback: &str) -> String {
    let joined: Vec<&str> = items.into_iter().filter(|s| !s.trim().is_empty()).collect();
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined.join(", ")
    }
}

/// Render a loosely-typed JSON scalar (string or number) for display.
///
/// Returns `None` for null, false, zero, empty strings and containers.
pub fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(format_number(n)),
        _ => None,
    }
}

/// Loose truthiness of a JSON value: `true`, non-zero numbers and non-blank
/// strings count; null, `false`, zero and blanks do not.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
    }
}

/// Non-zero number as display text (`12.5`, `3`).
pub fn number(value: Option<f64>) -> Option<String> {
    value
        .filter(|v| *v != 0.0 && v.is_finite())
        .map(|v| format!("{}", v))
}

fn format_number(n: &serde_json::Number) -> String {
    match (n.as_i64(), n.as_f64()) {
        (Some(i), _) => i.to_string(),
        (None, Some(f)) => format!("{}", f),
        _ => n.to_string(),
    }
}

/// Cut `text` to at most `limit` characters, appending `...` when cut.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_or_treats_blank_as_missing() {
        assert_eq!(text_or(Some("Nutella"), "Unknown"), "Nutella");
        assert_eq!(text_or(Some(""), "Unknown"), "Unknown");
        assert_eq!(text_or(Some("   "), "Unknown"), "Unknown");
        assert_eq!(text_or(None, "Unknown"), "Unknown");
    }

    #[test]
    fn test_join_or() {
        assert_eq!(join_or(["a", "b"], "none"), "a, b");
        assert_eq!(join_or(["", "b"], "none"), "b");
        assert_eq!(join_or(Vec::<&str>::new(), "none"), "none");
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(scalar(Some(&json!("19.90"))), Some("19.90".to_string()));
        assert_eq!(scalar(Some(&json!(19.9))), Some("19.9".to_string()));
        assert_eq!(scalar(Some(&json!(20))), Some("20".to_string()));
        assert_eq!(scalar(Some(&json!(0))), None);
        assert_eq!(scalar(Some(&json!(""))), None);
        assert_eq!(scalar(Some(&Value::Null)), None);
        assert_eq!(scalar(None), None);
    }

    #[test]
    fn test_truthy() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("yes")));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn test_number() {
        assert_eq!(number(Some(4.5)), Some("4.5".to_string()));
        assert_eq!(number(Some(12.0)), Some("12".to_string()));
        assert_eq!(number(Some(0.0)), None);
        assert_eq!(number(None), None);
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
