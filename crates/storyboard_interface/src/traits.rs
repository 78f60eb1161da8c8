//! Trait definitions for provider adapters and export targets.

use async_trait::async_trait;
use storyboard_core::{BuiltPrompt, PromptContract, ProviderChoice};
use storyboard_error::{ProviderResult, StoryboardResult};

/// Scene objects exactly as a provider returned them, before structural checks.
pub type RawScenes = Vec<serde_json::Value>;

/// Core trait that every provider adapter implements.
///
/// An adapter performs exactly one request per call: it never retries, paginates
/// or streams. Failures are returned unclassified.
#[async_trait]
pub trait SceneProvider: Send + Sync {
    /// Sends one generation request and returns the extracted scene array.
    ///
    /// The credential is borrowed for the duration of the call only.
    async fn generate(&self, prompt: &BuiltPrompt, credential: &str) -> ProviderResult<RawScenes>;

    /// Which provider this adapter talks to.
    fn provider(&self) -> ProviderChoice;

    /// Model identifier sent with each request.
    fn model_name(&self) -> &str;

    /// The instruction contract this adapter's provider expects.
    fn contract(&self) -> PromptContract;
}

/// Caller-supplied capability for getting generated text out of the process.
///
/// Storyboard never touches files or the clipboard itself; it hands final strings
/// to an `Exporter`.
pub trait Exporter {
    /// Saves `content` under `filename`.
    fn export_text(&self, filename: &str, content: &str) -> StoryboardResult<()>;

    /// Places `content` wherever this exporter's notion of "copy" puts it.
    fn copy_text(&self, content: &str) -> StoryboardResult<()>;
}
