//! Helpers for the optional text fields of request bodies.

use serde::{de, Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Returns the trimmed value when it is present and not blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the trimmed value, or `label` when the field is absent or blank.
pub fn or_label<'a>(value: &'a Option<String>, label: &'a str) -> &'a str {
    non_blank(value).unwrap_or(label)
}

/// Deserializes an optional text field that web forms may also send as a
/// number or a boolean. `null`, `false` and `0` read as absent.
///
/// Use with `#[serde(default, deserialize_with = "lenient_text")]`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(display_number(&n))),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}

/// Renders a JSON number for a prompt: whole values lose their `.0`.
pub fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "lenient_text")]
        field: Option<String>,
    }

    fn read(body: Value) -> Result<Option<String>, serde_json::Error> {
        serde_json::from_value::<Form>(body).map(|f| f.field)
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&Some("  Rust ".to_string())), Some("Rust"));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&Some(String::new())), None);
        assert_eq!(non_blank(&None), None);
    }

    #[test]
    fn test_or_label() {
        assert_eq!(or_label(&None, "PME"), "PME");
        assert_eq!(or_label(&Some("\t".to_string()), "PME"), "PME");
        assert_eq!(or_label(&Some("ETI".to_string()), "PME"), "ETI");
    }

    #[test]
    fn test_lenient_text_accepts_scalars() {
        assert_eq!(read(json!({"field": "5 ans"})).unwrap().as_deref(), Some("5 ans"));
        assert_eq!(read(json!({"field": 5})).unwrap().as_deref(), Some("5"));
        assert_eq!(read(json!({"field": 2.5})).unwrap().as_deref(), Some("2.5"));
        assert_eq!(read(json!({"field": true})).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_lenient_text_falsy_values_are_absent() {
        assert_eq!(read(json!({})).unwrap(), None);
        assert_eq!(read(json!({"field": null})).unwrap(), None);
        assert_eq!(read(json!({"field": false})).unwrap(), None);
        assert_eq!(read(json!({"field": 0})).unwrap(), None);
    }

    #[test]
    fn test_lenient_text_rejects_structures() {
        assert!(read(json!({"field": ["a"]})).is_err());
        assert!(read(json!({"field": {"a": 1}})).is_err());
    }

    #[test]
    fn test_display_number_drops_trailing_zero() {
        assert_eq!(display_number(&Number::from_f64(65.0).unwrap()), "65");
        assert_eq!(display_number(&Number::from_f64(62.5).unwrap()), "62.5");
        assert_eq!(display_number(&Number::from(70)), "70");
        assert_eq!(display_number(&Number::from(-3)), "-3");
    }
}
