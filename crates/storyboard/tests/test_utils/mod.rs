//! Test utilities for Storyboard tests.
//!
//! This module provides a mock scene provider and scene fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use storyboard_core::{BuiltPrompt, PromptContract, PromptStyle, ProviderChoice, ResponseEnvelope};
use storyboard_error::{ProviderError, ProviderErrorKind, ProviderResult};
use storyboard_interface::{RawScenes, SceneProvider};

/// What the mock answers on every call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return these raw scenes
    Scenes(RawScenes),
    /// Fail with this error
    Error(ProviderErrorKind),
}

/// Mock scene provider that records its calls.
pub struct MockSceneProvider {
    provider: ProviderChoice,
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<(BuiltPrompt, String)>>>,
}

impl MockSceneProvider {
    /// A mock that always answers with `scenes`.
    pub fn new_success(provider: ProviderChoice, scenes: RawScenes) -> Self {
        Self {
            provider,
            behavior: MockBehavior::Scenes(scenes),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A mock that always fails with `error`.
    pub fn new_error(provider: ProviderChoice, error: ProviderErrorKind) -> Self {
        Self {
            provider,
            behavior: MockBehavior::Error(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the recorded calls, usable after the mock is moved into a generator.
    pub fn calls(&self) -> Arc<Mutex<Vec<(BuiltPrompt, String)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SceneProvider for MockSceneProvider {
    async fn generate(&self, prompt: &BuiltPrompt, credential: &str) -> ProviderResult<RawScenes> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.clone(), credential.to_string()));

        match &self.behavior {
            MockBehavior::Scenes(scenes) => Ok(scenes.clone()),
            MockBehavior::Error(kind) => Err(ProviderError::new(kind.clone())),
        }
    }

    fn provider(&self) -> ProviderChoice {
        self.provider
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn contract(&self) -> PromptContract {
        match self.provider {
            ProviderChoice::Gemini => PromptContract::new(PromptStyle::Plain, ResponseEnvelope::Array),
            ProviderChoice::OpenAI => {
                PromptContract::new(PromptStyle::Structured, ResponseEnvelope::ScenesObject)
            }
        }
    }
}

/// A raw scene with a plain prompt.
pub fn plain_scene(index: u32) -> Value {
    json!({
        "scene": index,
        "description": format!("Cảnh số {}", index),
        "prompt": format!("Cinematic shot number {}", index),
    })
}

/// A raw scene with a structured prompt.
pub fn structured_scene(index: u32) -> Value {
    json!({
        "scene": index,
        "description": format!("Cảnh số {}", index),
        "prompt": {
            "Objective": "Generate a cinematic 8-second clip",
            "Persona": {"Role": "Director", "Tone": "Epic", "Knowledge_Level": "Expert"},
            "Task_Instructions": ["Open on a wide shot"],
            "Constraints": ["No text overlays"],
            "Input_Examples": [{"Input": "A cat", "Expected_Output": "A cat on a roof"}],
            "Output_Format": {
                "Type": "Video",
                "Structure": {
                    "character_details": "An orange cat",
                    "setting_details": "Rooftop at dusk",
                    "key_action": "The cat leaps",
                    "camera_direction": "Slow dolly in"
                }
            }
        }
    })
}
