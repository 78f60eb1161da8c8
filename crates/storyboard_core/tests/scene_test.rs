use serde_json::json;
use storyboard_core::{PromptContent, PromptShape, ProviderChoice, Credentials, Scene};
use std::str::FromStr;

fn structured_prompt_json() -> serde_json::Value {
    json!({
        "Objective": "Show Kong waking up",
        "Persona": {"Role": "Director", "Tone": "Epic", "Knowledge_Level": "Expert"},
        "Task_Instructions": ["Open on the jungle", "Push in on Kong"],
        "Constraints": ["No text overlays"],
        "Input_Examples": [{"Input": "jungle dawn", "Expected_Output": "misty wide shot"}],
        "Output_Format": {
            "Type": "video",
            "Structure": {
                "character_details": "Giant silverback gorilla, scar over left eye",
                "setting_details": "Amazon rainforest at dawn",
                "key_action": "Kong beats his chest",
                "camera_direction": "Low-angle slow push-in"
            }
        }
    })
}

#[test]
fn plain_prompt_deserializes() {
    let scene: Scene =
        serde_json::from_value(json!({"scene": 2, "description": "Mô tả", "prompt": "A shot"}))
            .unwrap();

    assert_eq!(*scene.index(), 2);
    assert_eq!(scene.description(), "Mô tả");
    assert_eq!(scene.prompt().shape(), PromptShape::Plain);
}

#[test]
fn structured_prompt_deserializes() {
    let scene: Scene = serde_json::from_value(json!({
        "scene": 1,
        "description": "Kong thức dậy",
        "prompt": structured_prompt_json(),
    }))
    .unwrap();

    let PromptContent::Structured(prompt) = scene.prompt() else {
        panic!("expected structured prompt");
    };
    assert_eq!(prompt.persona().tone(), "Epic");
    assert_eq!(prompt.task_instructions().len(), 2);
    assert_eq!(
        prompt.output_format().structure().key_action(),
        "Kong beats his chest"
    );
}

#[test]
fn structured_prompt_missing_field_is_rejected() {
    let mut prompt = structured_prompt_json();
    prompt["Persona"].as_object_mut().unwrap().remove("Tone");

    let result: Result<Scene, _> = serde_json::from_value(json!({
        "scene": 1,
        "description": "x",
        "prompt": prompt,
    }));
    assert!(result.is_err());
}

#[test]
fn scene_serializes_index_as_scene() {
    let scene = Scene::new(3, "Mô tả", "Prompt");
    let value = serde_json::to_value(&scene).unwrap();
    assert_eq!(value, json!({"scene": 3, "description": "Mô tả", "prompt": "Prompt"}));
}

#[test]
fn structured_prompt_renders_as_pretty_json() {
    let content: PromptContent = serde_json::from_value(structured_prompt_json()).unwrap();
    let text = content.to_text();

    assert!(text.starts_with("{\n  \"Objective\""));
    assert_eq!(PromptContent::from("raw").to_text(), "raw");
}

#[test]
fn provider_choice_parses_case_insensitively() {
    assert_eq!(ProviderChoice::from_str("Gemini").unwrap(), ProviderChoice::Gemini);
    assert_eq!(ProviderChoice::from_str("OPENAI").unwrap(), ProviderChoice::OpenAI);
    assert!(ProviderChoice::from_str("claude").is_err());
}

#[test]
fn blank_credentials_count_as_absent() {
    let credentials = Credentials::default().with_gemini("   ").with_openai("sk-test");

    assert_eq!(credentials.for_provider(ProviderChoice::Gemini), None);
    assert_eq!(credentials.for_provider(ProviderChoice::OpenAI), Some("sk-test"));
}

#[test]
fn credentials_debug_is_redacted() {
    let credentials = Credentials::default().with_openai("sk-secret");
    assert!(!format!("{:?}", credentials).contains("sk-secret"));
}
