//! Extraction of the scene array from a provider's text payload.

use serde_json::Value;
use storyboard_core::ResponseEnvelope;
use storyboard_error::{ProviderError, ProviderResult};
use storyboard_interface::RawScenes;
use tracing::{debug, warn};

/// Parses a payload that must be a bare JSON array of scenes.
///
/// # Errors
///
/// Returns a malformed-response error if the text is not JSON or not an array.
pub fn extract_scene_array(text: &str) -> ProviderResult<RawScenes> {
    match parse_json(text)? {
        Value::Array(scenes) => {
            debug!(count = scenes.len(), "Extracted scene array");
            Ok(scenes)
        }
        other => {
            warn!(kind = json_kind(&other), "Expected a JSON array of scenes");
            Err(ProviderError::malformed(format!(
                "expected a JSON array of scenes, got {}",
                json_kind(&other)
            )))
        }
    }
}

/// Parses a payload that must be a JSON object holding the scene array under `scenes`.
///
/// # Errors
///
/// Returns a malformed-response error if the text is not a JSON object, the
/// `scenes` key is missing, or its value is not an array.
///
/// # Examples
///
/// ```
/// use storyboard_models::extract_scenes_object;
///
/// assert!(extract_scenes_object(r#"{"scenes": []}"#).unwrap().is_empty());
/// assert!(extract_scenes_object(r#"{"foo": []}"#).is_err());
/// ```
pub fn extract_scenes_object(text: &str) -> ProviderResult<RawScenes> {
    let key = ResponseEnvelope::SCENES_KEY;
    let Value::Object(mut object) = parse_json(text)? else {
        warn!("Expected a JSON object wrapping the scenes");
        return Err(ProviderError::malformed(format!(
            "expected a JSON object with a \"{key}\" array"
        )));
    };

    match object.remove(key) {
        Some(Value::Array(scenes)) => {
            debug!(count = scenes.len(), "Extracted scenes from object");
            Ok(scenes)
        }
        Some(other) => Err(ProviderError::malformed(format!(
            "\"{key}\" must be an array, got {}",
            json_kind(&other)
        ))),
        None => Err(ProviderError::malformed(format!(
            "response object has no \"{key}\" key"
        ))),
    }
}

fn parse_json(text: &str) -> ProviderResult<Value> {
    serde_json::from_str(text.trim()).map_err(|e| {
        warn!(error = %e, "Provider payload is not valid JSON");
        ProviderError::malformed(format!("invalid JSON: {}", e))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyboard_error::ProviderErrorKind;

    #[test]
    fn array_payload_tolerates_surrounding_whitespace() {
        let scenes = extract_scene_array("\n  [{\"scene\": 1}]  \n").unwrap();
        assert_eq!(scenes.len(), 1);
    }

    #[test]
    fn object_payload_is_not_an_array() {
        let err = extract_scene_array(r#"{"scenes": []}"#).unwrap_err();
        assert!(matches!(err.kind, ProviderErrorKind::MalformedResponse(_)));
    }

    #[test]
    fn scenes_key_must_hold_an_array() {
        let err = extract_scenes_object(r#"{"scenes": {"scene": 1}}"#).unwrap_err();
        assert!(err.kind.raw_message().contains("must be an array"));
    }

    #[test]
    fn truncated_json_is_malformed() {
        let err = extract_scenes_object(r#"{"scenes": [{"scene": 1"#).unwrap_err();
        assert!(err.kind.raw_message().starts_with("invalid JSON"));
    }
}
