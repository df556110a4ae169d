//! Input Sanitizing and Record Validation

use serde_json::Value;

/// Fields every stored or dropped record must carry
pub const REQUIRED_FIELDS: [&str; 6] = ["id", "type", "bedrooms", "price", "location", "description"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record is missing `{0}`")]
    MissingField(&'static str),
    #[error("record field `{0}` is blank")]
    BlankField(&'static str),
    #[error("record does not decode: {0}")]
    Decode(String),
}

/// Escape HTML-significant characters in user input
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drop raw angle brackets
pub fn strip_markup(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Check that a record carries every required field with a non-blank value
pub fn validate_record(record: &Value) -> Result<(), ValidationError> {
    let object = record.as_object().ok_or(ValidationError::NotAnObject)?;
    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => return Err(ValidationError::MissingField(field)),
            Some(value) if is_blank(value) => return Err(ValidationError::BlankField(field)),
            Some(_) => {}
        }
    }
    Ok(())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "id": "p1",
            "type": "House",
            "bedrooms": 0,
            "price": 0,
            "location": "Leeds",
            "description": "Studio"
        })
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(
            sanitize_input(r#"<a href="x">Tom's & Co/</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#x27;s &amp; Co&#x2F;&lt;&#x2F;a&gt;"
        );
        assert_eq!(sanitize_input("E14 London"), "E14 London");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<script>Bow"), "scriptBow");
    }

    #[test]
    fn test_zero_numbers_are_present() {
        assert_eq!(validate_record(&record()), Ok(()));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let mut r = record();
        r.as_object_mut().unwrap().remove("price");
        assert_eq!(validate_record(&r), Err(ValidationError::MissingField("price")));

        let mut r = record();
        r["description"] = Value::Null;
        assert_eq!(validate_record(&r), Err(ValidationError::MissingField("description")));
    }

    #[test]
    fn test_blank_field() {
        let mut r = record();
        r["location"] = json!("   ");
        assert_eq!(validate_record(&r), Err(ValidationError::BlankField("location")));
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(validate_record(&json!(["p1"])), Err(ValidationError::NotAnObject));
        assert_eq!(validate_record(&json!("p1")), Err(ValidationError::NotAnObject));
    }
}
