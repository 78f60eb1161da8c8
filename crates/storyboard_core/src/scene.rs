//! Scenes and their two prompt shapes.

use crate::StructuredPrompt;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The prompt attached to a scene.
///
/// Providers answer either with a plain English prompt string or with a
/// [`StructuredPrompt`] object, depending on the contract they were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum PromptContent {
    /// A single free-text prompt
    Plain(String),
    /// The fixed multi-field prompt object
    Structured(Box<StructuredPrompt>),
}

/// Which [`PromptContent`] variant a value holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PromptShape {
    /// [`PromptContent::Plain`]
    #[display("plain")]
    Plain,
    /// [`PromptContent::Structured`]
    #[display("structured")]
    Structured,
}

impl PromptShape {
    /// Shape of a raw JSON prompt value, or `None` if it is neither a string nor an object.
    pub fn of_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(_) => Some(PromptShape::Plain),
            serde_json::Value::Object(_) => Some(PromptShape::Structured),
            _ => None,
        }
    }
}

impl PromptContent {
    /// The shape of this prompt.
    pub fn shape(&self) -> PromptShape {
        match self {
            PromptContent::Plain(_) => PromptShape::Plain,
            PromptContent::Structured(_) => PromptShape::Structured,
        }
    }

    /// Renders the prompt as text: plain prompts verbatim, structured prompts as
    /// pretty-printed JSON.
    pub fn to_text(&self) -> String {
        match self {
            PromptContent::Plain(text) => text.clone(),
            PromptContent::Structured(prompt) => {
                serde_json::to_string_pretty(prompt).unwrap_or_default()
            }
        }
    }
}

impl From<&str> for PromptContent {
    fn from(text: &str) -> Self {
        PromptContent::Plain(text.to_string())
    }
}

impl From<StructuredPrompt> for PromptContent {
    fn from(prompt: StructuredPrompt) -> Self {
        PromptContent::Structured(Box::new(prompt))
    }
}

/// One numbered unit of generated output.
///
/// `index` is 1-based and serialized as `scene`, matching the provider contract.
///
/// # Examples
///
/// ```
/// use storyboard_core::{PromptContent, Scene};
///
/// let scene: Scene = serde_json::from_str(
///     r#"{"scene": 1, "description": "Kong thức dậy", "prompt": "cinematic shot"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(*scene.index(), 1);
/// assert_eq!(scene.prompt(), &PromptContent::Plain("cinematic shot".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Scene {
    /// 1-based position in the script, as supplied by the provider
    #[serde(rename = "scene")]
    index: u32,
    /// What happens in the scene, in Vietnamese
    description: String,
    /// Video-generation prompt, in English
    prompt: PromptContent,
}

impl Scene {
    /// Creates a scene.
    pub fn new(index: u32, description: impl Into<String>, prompt: impl Into<PromptContent>) -> Self {
        Self {
            index,
            description: description.into(),
            prompt: prompt.into(),
        }
    }
}
