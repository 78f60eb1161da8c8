//! Storyboard - scene-by-scene video scripts from a single idea.
//!
//! Storyboard turns a free-text content idea and an optional desired duration
//! ("1 phút 30 giây", "90s") into numbered scenes, each pairing a Vietnamese
//! description with an English video-generation prompt. Two providers are
//! supported behind one [`SceneProvider`] interface:
//!
//! - **Google Gemini**, called with a server-enforced response schema
//! - **OpenAI**, called in chat-completion JSON mode
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storyboard::{Generator, StoryboardConfig};
//! use storyboard_core::{Credentials, ProviderChoice};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = Generator::from_config(&StoryboardConfig::load()?);
//!     let credentials = Credentials::default().with_gemini(std::env::var("GEMINI_API_KEY")?);
//!
//!     match generator
//!         .run("Một ngày của chú mèo", "40s", ProviderChoice::Gemini, &credentials)
//!         .await
//!     {
//!         Ok(scenes) => println!("{}", storyboard::script_document(&scenes)?),
//!         Err(e) => eprintln!("{}", e.message()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_core` - Data model, duration parsing, prompt building
//! - `storyboard_interface` - `SceneProvider` and `Exporter` traits
//! - `storyboard_error` - Error types
//! - `storyboard_models` - Gemini and OpenAI adapters, configuration, metrics
//!
//! This crate adds error normalization, the generation orchestrator and export
//! helpers, and re-exports the pieces most callers need.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod export;
mod normalize;
mod orchestrator;
mod slot;

pub use batch::parse_scene_batch;
pub use export::{
    DirectoryExporter, PROMPTS_FILE_NAME, SCRIPT_FILE_NAME, copy_scene, copy_text,
    export_documents, prompts_document, script_document,
};
pub use normalize::{normalize, normalize_text};
pub use orchestrator::{GenerationOutcome, GenerationState, Generator};
pub use slot::{RequestTicket, ResultSlot};

// Re-export the building blocks
pub use storyboard_core::{
    Credentials, DurationSpec, PromptContent, PromptStyle, ProviderChoice, Scene,
    StructuredPrompt,
};
pub use storyboard_error::{
    GenerationError, GenerationErrorKind, StoryboardError, StoryboardErrorKind,
    StoryboardResult,
};
pub use storyboard_interface::{Exporter, SceneProvider};
pub use storyboard_models::{GeminiClient, OpenAIClient, StoryboardConfig};
