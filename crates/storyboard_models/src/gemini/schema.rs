//! Response schema declared to Gemini.

use serde_json::{Value, json};
use storyboard_core::PromptStyle;

/// The array-of-scenes schema for the given prompt style.
///
/// Uses Gemini's OpenAPI subset (upper-case type names). Every field is required.
///
/// # Examples
///
/// ```
/// use storyboard_core::PromptStyle;
/// use storyboard_models::scene_array_schema;
///
/// let schema = scene_array_schema(PromptStyle::Plain);
/// assert_eq!(schema["type"], "ARRAY");
/// assert_eq!(schema["items"]["properties"]["prompt"]["type"], "STRING");
/// ```
pub fn scene_array_schema(style: PromptStyle) -> Value {
    let prompt = match style {
        PromptStyle::Plain => json!({
            "type": "STRING",
            "description": "A detailed, vivid prompt in ENGLISH for a text-to-video AI, based on the scene description.",
        }),
        PromptStyle::Structured => structured_prompt_schema(),
    };

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "scene": {
                    "type": "INTEGER",
                    "description": "The scene number, starting from 1.",
                },
                "description": {
                    "type": "STRING",
                    "description": "A VIETNAMESE description of what happens in this scene.",
                },
                "prompt": prompt,
            },
            "required": ["scene", "description", "prompt"],
        },
    })
}

fn text() -> Value {
    json!({ "type": "STRING" })
}

fn text_list() -> Value {
    json!({ "type": "ARRAY", "items": text() })
}

fn structured_prompt_schema() -> Value {
    json!({
        "type": "OBJECT",
        "description": "A structured ENGLISH prompt for a text-to-video AI.",
        "properties": {
            "Objective": text(),
            "Persona": {
                "type": "OBJECT",
                "properties": {
                    "Role": text(),
                    "Tone": text(),
                    "Knowledge_Level": text(),
                },
                "required": ["Role", "Tone", "Knowledge_Level"],
            },
            "Task_Instructions": text_list(),
            "Constraints": text_list(),
            "Input_Examples": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "Input": text(),
                        "Expected_Output": text(),
                    },
                    "required": ["Input", "Expected_Output"],
                },
            },
            "Output_Format": {
                "type": "OBJECT",
                "properties": {
                    "Type": text(),
                    "Structure": {
                        "type": "OBJECT",
                        "properties": {
                            "character_details": text(),
                            "setting_details": text(),
                            "key_action": text(),
                            "camera_direction": text(),
                        },
                        "required": [
                            "character_details",
                            "setting_details",
                            "key_action",
                            "camera_direction",
                        ],
                    },
                },
                "required": ["Type", "Structure"],
            },
        },
        "required": [
            "Objective",
            "Persona",
            "Task_Instructions",
            "Constraints",
            "Input_Examples",
            "Output_Format",
        ],
    })
}
