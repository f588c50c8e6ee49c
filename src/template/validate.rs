//! Configuration-time and execution-time JSON template parsing.

use serde_json::Value;

use super::TemplateError;

/// Validates a payload or headers template.
///
/// Empty or whitespace-only text is valid and means "no template".
/// Anything else must parse as JSON. Unsubstituted tokens inside string
/// leaves are fine; the JSON syntax around them must already be well
/// formed.
///
/// Applied identically to payload and headers templates when a rule is
/// saved, so malformed templates never reach the execution path.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidJson`] carrying the parser's message
/// when the text fails to parse.
///
/// # Example
///
/// ```
/// use commithook::template::validate;
///
/// assert!(validate("").is_ok());
/// assert!(validate(r#"{"url": "${url}"}"#).is_ok());
/// assert!(validate("{bad json").is_err());
/// ```
pub fn validate(text: &str) -> Result<(), TemplateError> {
    parse_or_empty(text).map(drop)
}

/// Parses a template, treating empty text as an empty JSON object.
///
/// Used on the execution path for both the payload and the headers
/// template: an absent template dispatches no fields rather than failing.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidJson`] when non-empty text fails to
/// parse.
pub fn parse_or_empty(text: &str) -> Result<Value, TemplateError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(text).map_err(|e| TemplateError::InvalidJson {
        message: e.to_string(),
    })
}

/// Human-readable name of a JSON value's type, for diagnostics.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
