//! System and user instruction assembly.
//!
//! The system instruction is the fixed creative contract with the provider. Only two
//! things vary: the prompt shape demanded for each scene ([`PromptStyle`]) and whether
//! the scene array is returned bare or wrapped in an object ([`ResponseEnvelope`]).
//! Cross-scene consistency is requested in text only; nothing here enforces it.

use crate::DurationSpec;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Shape of the `prompt` field the provider is asked to produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PromptStyle {
    /// A single English prompt string per scene
    #[default]
    Plain,
    /// A [`StructuredPrompt`](crate::StructuredPrompt) object per scene
    Structured,
}

/// How the scene array is packaged in the provider's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseEnvelope {
    /// The answer is the JSON array itself
    #[default]
    Array,
    /// The answer is a JSON object holding the array under [`ResponseEnvelope::SCENES_KEY`]
    ScenesObject,
}

impl ResponseEnvelope {
    /// Key under which [`ResponseEnvelope::ScenesObject`] answers carry the scenes.
    pub const SCENES_KEY: &'static str = "scenes";
}

/// What a provider adapter expects the instructions to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters)]
pub struct PromptContract {
    /// Per-scene prompt shape
    style: PromptStyle,
    /// Packaging of the scene array
    envelope: ResponseEnvelope,
}

impl PromptContract {
    /// Creates a contract.
    pub fn new(style: PromptStyle, envelope: ResponseEnvelope) -> Self {
        Self { style, envelope }
    }
}

/// A fully assembled pair of instructions, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BuiltPrompt {
    /// Static creative and structural contract
    system_instruction: String,
    /// Per-request instruction carrying the idea and duration
    user_instruction: String,
}

impl BuiltPrompt {
    /// Creates a prompt from already assembled parts.
    pub fn new(system_instruction: impl Into<String>, user_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_instruction: user_instruction.into(),
        }
    }
}

/// Builds [`BuiltPrompt`]s for one [`PromptContract`].
///
/// # Examples
///
/// ```
/// use storyboard_core::{DurationSpec, PromptBuilder, PromptContract};
///
/// let builder = PromptBuilder::new(PromptContract::default());
/// let prompt = builder.build("Kong đại chiến Gấu", &DurationSpec::parse("1 phút"));
///
/// assert!(prompt.user_instruction().contains("Idea: \"Kong đại chiến Gấu\""));
/// assert!(prompt.user_instruction().contains("exactly 8 scenes"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromptBuilder {
    contract: PromptContract,
}

impl PromptBuilder {
    /// Creates a builder for the given contract.
    pub fn new(contract: PromptContract) -> Self {
        Self { contract }
    }

    /// The contract this builder writes instructions for.
    pub fn contract(&self) -> PromptContract {
        self.contract
    }

    /// Assembles the system and user instructions for one request.
    #[instrument(skip(self, idea), fields(style = %self.contract.style, scenes = ?duration.required_scene_count()))]
    pub fn build(&self, idea: &str, duration: &DurationSpec) -> BuiltPrompt {
        let system_instruction = self.system_instruction();
        let user_instruction = Self::user_instruction(idea, duration);
        debug!(
            system_len = system_instruction.len(),
            user_len = user_instruction.len(),
            "Built prompt"
        );
        BuiltPrompt {
            system_instruction,
            user_instruction,
        }
    }

    /// The static system instruction for this builder's contract.
    pub fn system_instruction(&self) -> String {
        let output_format = match self.contract.envelope {
            ResponseEnvelope::Array => {
                "Your final output MUST be a valid JSON array of scene objects, with no other text or markdown."
                    .to_string()
            }
            ResponseEnvelope::ScenesObject => format!(
                "Your final output MUST be a single valid JSON object with exactly one key, \"{}\", whose value is an array of scene objects, with no other text or markdown.",
                ResponseEnvelope::SCENES_KEY
            ),
        };

        let (object_schema, prompt_crafting) = match self.contract.style {
            PromptStyle::Plain => (PLAIN_OBJECT_SCHEMA, PLAIN_PROMPT_CRAFTING),
            PromptStyle::Structured => (STRUCTURED_OBJECT_SCHEMA, STRUCTURED_PROMPT_CRAFTING),
        };

        format!(
            "{INTRO}\n\n{LANGUAGE}\n\n{STORYTELLING}\n\n- **Output Format:** {output_format}\n\n- **JSON Object Schema:** {object_schema}\n\n{prompt_crafting}\n\n{CONSISTENCY}\n\n{GOAL}"
        )
    }

    fn user_instruction(idea: &str, duration: &DurationSpec) -> String {
        let mut instruction = format!(
            "Generate a script and video prompts based on these details:\n\nIdea: \"{idea}\""
        );

        match (duration.total_seconds(), duration.required_scene_count()) {
            (Some(seconds), Some(scenes)) => instruction.push_str(&format!(
                "\n\nRequirement: The final video should be approximately {} ({} seconds). To achieve this, you MUST generate exactly {} scenes, as each scene will become an 8-second video clip.",
                duration.raw(),
                seconds,
                scenes
            )),
            _ => {
                let hint = if duration.raw().trim().is_empty() {
                    "not specified"
                } else {
                    duration.raw().as_str()
                };
                instruction.push_str(&format!("\n\nDesired Video Duration: \"{hint}\""));
            }
        }

        instruction
    }
}

const INTRO: &str = "You are an expert scriptwriter and AI prompt engineer. Your task is to transform a user's simple idea into a detailed, thrilling script with corresponding high-quality video prompts.";

const LANGUAGE: &str = "**LANGUAGE REQUIREMENT (CRITICAL):**
- The \"description\" field MUST be written in VIETNAMESE. This is for the user to understand the scene.
- The \"prompt\" field MUST be written in ENGLISH. This is for the AI video generator.";

const STORYTELLING: &str = "- **Storytelling & Scene Generation:**
    - Develop a compelling narrative from the user's idea, with a clear beginning, rising action, a climax, and a resolution.
    - If the user specifies a number of scenes, generate exactly that number. Otherwise, aim for 10-20 scenes for a complete story.
    - Create thrilling, diverse scenes with unexpected twists and dramatic moments.";

const PLAIN_OBJECT_SCHEMA: &str = "Each object must strictly follow this structure: { \"scene\": number, \"description\": \"string in VIETNAMESE\", \"prompt\": \"string in ENGLISH\" }.";

const STRUCTURED_OBJECT_SCHEMA: &str = "Each object must strictly follow this structure: { \"scene\": number, \"description\": \"string in VIETNAMESE\", \"prompt\": { \"Objective\": \"string\", \"Persona\": { \"Role\": \"string\", \"Tone\": \"string\", \"Knowledge_Level\": \"string\" }, \"Task_Instructions\": [\"string\"], \"Constraints\": [\"string\"], \"Input_Examples\": [{ \"Input\": \"string\", \"Expected_Output\": \"string\" }], \"Output_Format\": { \"Type\": \"string\", \"Structure\": { \"character_details\": \"string\", \"setting_details\": \"string\", \"key_action\": \"string\", \"camera_direction\": \"string\" } } } }. Every field of \"prompt\" is required and every value inside it MUST be in ENGLISH.";

const PLAIN_PROMPT_CRAFTING: &str = "- **Video Prompt Crafting (Crucial - IN ENGLISH):**
    - For each scene, generate a single, highly detailed prompt.
    - **Cinematic Quality:** Use terms like \"cinematic shot,\" \"4K, high detail,\" \"photorealistic.\"
    - **Camera Work:** Include specific camera movements and angles (e.g., \"dynamic tracking shot,\" \"extreme slow-motion close-up,\" \"sweeping aerial drone shot\").
    - **Vivid Details:** Describe lighting, environment, character appearance, emotions, and actions with rich detail.";

const STRUCTURED_PROMPT_CRAFTING: &str = "- **Video Prompt Crafting (Crucial - IN ENGLISH):**
    - For each scene, fill every field of the structured prompt object.
    - **Objective:** One sentence stating what the 8-second clip must show.
    - **Task_Instructions and Constraints:** Ordered, concrete directions for the video model (cinematic quality, \"4K, high detail,\" \"photorealistic\").
    - **Output_Format.Structure:** Put character appearance in character_details, location and lighting in setting_details, the main beat in key_action, and specific camera movement (e.g., \"dynamic tracking shot,\" \"sweeping aerial drone shot\") in camera_direction.";

const CONSISTENCY: &str = "- **Character Consistency (Critical):** If a character appears in multiple scenes, you MUST describe their appearance with extreme consistency (clothing, hair, facial features, etc.). Repeat these details in every prompt where the character is present.
- **Setting Consistency:** Ensure setting details remain consistent across all prompts.";

const GOAL: &str = "- **Goal:** The final JSON should be directly usable. The user will copy each ENGLISH prompt to generate video scenes, using the VIETNAMESE description for context.";
