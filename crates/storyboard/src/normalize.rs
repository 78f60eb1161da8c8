//! Provider error normalization.
//!
//! Adapters report failures as raw [`ProviderError`]s carrying whatever text the
//! transport or provider produced. [`normalize`] maps that text onto the small,
//! user-facing [`GenerationErrorKind`] taxonomy. It never fails: anything it cannot
//! recognize becomes [`GenerationErrorKind::Unclassified`] with the text verbatim.

use serde_json::Value;
use storyboard_core::ProviderChoice;
use storyboard_error::{GenerationError, GenerationErrorKind, ProviderError, ProviderErrorKind};
use tracing::debug;

const GEMINI_KEY_MARKERS: [&str; 2] = ["API key not valid", "API_KEY_INVALID"];
const OPENAI_KEY_MARKER: &str = "Incorrect API key";
const RATE_LIMIT_MARKER: &str = "rate limit";

/// Normalizes a raw adapter failure.
///
/// A response the adapter could not parse is already classified and maps straight
/// to [`GenerationErrorKind::MalformedResponse`]; everything else is classified
/// from its message text by [`normalize_text`]. A blank message is replaced by the
/// error's full description, so the HTTP status still reaches the user.
#[track_caller]
pub fn normalize(error: &ProviderError) -> GenerationError {
    match &error.kind {
        ProviderErrorKind::MalformedResponse(detail) => {
            GenerationError::new(GenerationErrorKind::MalformedResponse(detail.clone()))
        }
        kind if kind.raw_message().trim().is_empty() => normalize_text(kind.to_string().trim()),
        kind => normalize_text(kind.raw_message()),
    }
}

/// Classifies raw provider error text. The first matching rule wins:
///
/// 1. An embedded JSON object reporting status `UNAVAILABLE` or code `503`:
///    [`ProviderOverloaded`](GenerationErrorKind::ProviderOverloaded).
/// 2. A Gemini invalid-key marker: [`InvalidCredential`](GenerationErrorKind::InvalidCredential)
///    for Gemini.
/// 3. Any other message nested in the embedded JSON:
///    [`ProviderRejected`](GenerationErrorKind::ProviderRejected) with that message.
/// 4. The OpenAI incorrect-key marker: `InvalidCredential` for OpenAI.
/// 5. "rate limit" in any case: [`RateLimited`](GenerationErrorKind::RateLimited).
/// 6. Otherwise [`Unclassified`](GenerationErrorKind::Unclassified), verbatim.
///
/// # Examples
///
/// ```
/// use storyboard::normalize_text;
/// use storyboard_error::GenerationErrorKind;
///
/// let err = normalize_text(r#"got {"error": {"code": 503, "status": "UNAVAILABLE"}}"#);
/// assert_eq!(err.kind, GenerationErrorKind::ProviderOverloaded);
/// ```
#[track_caller]
pub fn normalize_text(raw: &str) -> GenerationError {
    let kind = classify(raw);
    debug!(category = kind.category(), "Normalized provider error");
    GenerationError::new(kind)
}

fn classify(raw: &str) -> GenerationErrorKind {
    let embedded = embedded_json(raw);
    let body = embedded.as_ref().map(error_body);

    if body.is_some_and(is_overloaded) {
        return GenerationErrorKind::ProviderOverloaded;
    }

    if GEMINI_KEY_MARKERS.iter().any(|marker| raw.contains(marker)) {
        return GenerationErrorKind::InvalidCredential(ProviderChoice::Gemini);
    }

    if let Some(message) = body
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
    {
        return GenerationErrorKind::ProviderRejected(message.to_string());
    }

    if raw.contains(OPENAI_KEY_MARKER) {
        return GenerationErrorKind::InvalidCredential(ProviderChoice::OpenAI);
    }

    if raw.to_lowercase().contains(RATE_LIMIT_MARKER) {
        return GenerationErrorKind::RateLimited;
    }

    GenerationErrorKind::Unclassified(raw.to_string())
}

/// The JSON object embedded in `raw`.
///
/// Every `{` is tried as a start, and each object is read up to its own closing
/// brace, so unrelated braces around it do not matter. The first object carrying
/// an `error` key wins, else the first object found.
fn embedded_json(raw: &str) -> Option<Value> {
    let mut objects = raw.match_indices('{').filter_map(|(start, _)| {
        serde_json::Deserializer::from_str(&raw[start..])
            .into_iter::<Value>()
            .next()
            .and_then(Result::ok)
            .filter(Value::is_object)
    });

    let first = objects.next()?;
    if first.get("error").is_some() {
        return Some(first);
    }
    objects
        .find(|object| object.get("error").is_some())
        .or(Some(first))
}

/// The nested `error` object when present, else the top level.
fn error_body(value: &Value) -> &Value {
    value
        .get("error")
        .filter(|inner| inner.is_object())
        .unwrap_or(value)
}

fn is_overloaded(body: &Value) -> bool {
    let unavailable = body.get("status").and_then(Value::as_str) == Some("UNAVAILABLE");
    let code_503 = body.get("code").and_then(Value::as_i64) == Some(503);
    unavailable || code_503
}
