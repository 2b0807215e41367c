use serde_json::{Map, Value};

use crate::{
    error::{ExtractResult, InterpretError},
    event::{EventOutput, DEFAULT_TITLE},
};

/// Reads a completion as a JSON object and maps the known keys onto an
/// [`EventOutput`]. The text is parsed as data only.
pub fn interpret(completion: &str) -> ExtractResult<EventOutput> {
    Ok(parse_event(completion)?)
}

fn parse_event(completion: &str) -> Result<EventOutput, InterpretError> {
    let value: Value = serde_json::from_str(strip_code_fence(completion))?;

    let Value::Object(object) = value else {
        return Err(InterpretError::NotAnObject(type_name(&value)));
    };

    Ok(EventOutput {
        title: string_field(&object, "title")?
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        date: string_field(&object, "date")?,
        time: string_field(&object, "time")?,
        location: string_field(&object, "location")?,
        description: string_field(&object, "description")?,
    })
}

fn string_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, InterpretError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(InterpretError::FieldType { field }),
    }
}

// Models often wrap JSON in a Markdown fence even when told not to.
fn strip_code_fence(completion: &str) -> &str {
    let trimmed = completion.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    match inner.split_once('\n') {
        Some((info, body))
            if info.trim().chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            body.trim()
        }
        _ => strip_info_word(inner.trim()),
    }
}

// One-line fence: "json {...}" keeps only the value after the language tag.
fn strip_info_word(inner: &str) -> &str {
    let rest = inner.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    if rest.len() < inner.len() && rest.trim_start().starts_with(|c| c == '{' || c == '[') {
        rest.trim_start()
    } else {
        inner
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
