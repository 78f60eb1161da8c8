//! The structured variant of a scene prompt.
//!
//! Field names follow the wire contract given to the provider verbatim, so the
//! serde renames here are part of the protocol. Every field is required.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A fixed multi-field prompt that constrains a downstream video-generation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StructuredPrompt {
    /// What the clip must achieve
    #[serde(rename = "Objective")]
    objective: String,
    /// Voice the video model should adopt
    #[serde(rename = "Persona")]
    persona: Persona,
    /// Ordered steps for the video model
    #[serde(rename = "Task_Instructions")]
    task_instructions: Vec<String>,
    /// Ordered hard constraints
    #[serde(rename = "Constraints")]
    constraints: Vec<String>,
    /// Worked examples
    #[serde(rename = "Input_Examples")]
    input_examples: Vec<InputExample>,
    /// Expected output description
    #[serde(rename = "Output_Format")]
    output_format: OutputFormat,
}

/// Persona block of a [`StructuredPrompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Persona {
    /// Role the model plays
    #[serde(rename = "Role")]
    role: String,
    /// Tone of the output
    #[serde(rename = "Tone")]
    tone: String,
    /// Assumed audience expertise
    #[serde(rename = "Knowledge_Level")]
    knowledge_level: String,
}

/// A single input/output example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct InputExample {
    /// Example input
    #[serde(rename = "Input")]
    input: String,
    /// Output expected for that input
    #[serde(rename = "Expected_Output")]
    expected_output: String,
}

/// Output format block of a [`StructuredPrompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OutputFormat {
    /// Output type, e.g. "video"
    #[serde(rename = "Type")]
    kind: String,
    /// Per-shot details
    #[serde(rename = "Structure")]
    structure: OutputStructure,
}

/// The shot breakdown inside [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OutputStructure {
    /// Appearance of every character in the shot
    character_details: String,
    /// Location, lighting and atmosphere
    setting_details: String,
    /// The main action of the shot
    key_action: String,
    /// Camera movement and framing
    camera_direction: String,
}
