//! Structural check of a provider's scene array.

use storyboard_core::{PromptShape, Scene};
use storyboard_error::{GenerationError, GenerationErrorKind};
use storyboard_interface::RawScenes;
use tracing::warn;

const REQUIRED_FIELDS: [&str; 3] = ["scene", "description", "prompt"];

/// Converts raw provider scenes into [`Scene`]s.
///
/// Every element must be an object carrying `scene`, `description` and `prompt`,
/// and every prompt must have the shape of the first one. Scene indices are kept
/// exactly as the provider numbered them.
///
/// # Errors
///
/// Returns a [`GenerationErrorKind::MalformedResponse`] error describing the first
/// offending element.
#[track_caller]
pub fn parse_scene_batch(raw: RawScenes) -> Result<Vec<Scene>, GenerationError> {
    let mut batch_shape = None;
    let mut scenes = Vec::with_capacity(raw.len());

    for (position, value) in raw.into_iter().enumerate() {
        let Some(object) = value.as_object() else {
            return Err(malformed(format!("element {} is not an object", position)));
        };

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !object.contains_key(**f)) {
            return Err(malformed(format!(
                "element {} is missing field '{}'",
                position, missing
            )));
        }

        let Some(shape) = PromptShape::of_json(&object["prompt"]) else {
            return Err(malformed(format!(
                "element {} has a prompt that is neither text nor an object",
                position
            )));
        };

        match batch_shape {
            None => batch_shape = Some(shape),
            Some(expected) if expected != shape => {
                return Err(malformed(format!(
                    "element {} has a {} prompt in a {} batch",
                    position, shape, expected
                )));
            }
            Some(_) => {}
        }

        let scene = serde_json::from_value::<Scene>(value)
            .map_err(|e| malformed(format!("element {}: {}", position, e)))?;
        scenes.push(scene);
    }

    Ok(scenes)
}

#[track_caller]
fn malformed(detail: String) -> GenerationError {
    warn!(detail = %detail, "Provider returned a malformed scene batch");
    GenerationError::new(GenerationErrorKind::MalformedResponse(detail))
}
