//! Shared HTTP utilities for the directory gateway.

use serde_json::Value;

const MAX_MESSAGE_CHARS: usize = 160;

/// Pulls a human-readable message out of an error response body.
///
/// The directory answers with `{"message": ...}`, `{"detail": ...}`, or a
/// map of field names to error lists. Anything else is returned verbatim,
/// truncated.
pub(super) fn extract_directory_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return Some(truncate_for_message(trimmed, MAX_MESSAGE_CHARS));
    };

    for key in ["message", "detail"] {
        if let Some(text) = value.get(key).and_then(Value::as_str) {
            return Some(text.to_owned());
        }
    }

    field_errors(&value).or_else(|| Some(truncate_for_message(trimmed, MAX_MESSAGE_CHARS)))
}

fn field_errors(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    let parts: Vec<String> = object
        .iter()
        .filter_map(|(field, errors)| {
            let joined = match errors {
                Value::String(text) => text.clone(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => return None,
            };
            (!joined.is_empty()).then(|| format!("{field}: {joined}"))
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }
    output
}
