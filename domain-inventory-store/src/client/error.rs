//! Status code → `StoreError` mapping

use serde_json::Value;

use crate::error::StoreError;
use crate::traits::ErrorContext;

/// Plain-text bodies longer than this are treated as noise, not a message.
const MAX_PLAIN_MESSAGE_CHARS: usize = 200;

/// Map a non-success response to a [`StoreError`].
pub(crate) fn map_status_error(status: u16, body: &str, context: ErrorContext) -> StoreError {
    let raw_message = extract_message(body);
    match status {
        400 | 422 => StoreError::InvalidRequest { raw_message },
        401 | 403 => StoreError::Unauthorized { raw_message },
        404 => StoreError::DomainNotFound {
            id: context.id.unwrap_or_else(|| "<unknown>".to_string()),
            raw_message,
        },
        409 => StoreError::DomainExists {
            name: context.name.unwrap_or_else(|| "<unknown>".to_string()),
            raw_message,
        },
        500..=599 => StoreError::ServerError {
            status,
            raw_message,
        },
        _ => StoreError::Unknown {
            status,
            raw_message,
        },
    }
}

/// Pull a human-readable message out of an error body.
///
/// JSON bodies are searched for `message`, `error` and `errors[0].message`;
/// other bodies are used verbatim when short and not markup.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        return message_from_json(&json);
    }

    if body.starts_with('<') || body.chars().count() > MAX_PLAIN_MESSAGE_CHARS {
        return None;
    }
    Some(body.to_string())
}

fn message_from_json(json: &Value) -> Option<String> {
    let non_empty = |v: &Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    json.get("message")
        .and_then(non_empty)
        .or_else(|| json.get("error").and_then(non_empty))
        .or_else(|| {
            json.get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|first| first.get("message"))
                .and_then(non_empty)
        })
        .or_else(|| non_empty(json))
}
