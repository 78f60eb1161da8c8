//! AI provider adapters for Storyboard.
//!
//! Two structurally different provider protocols sit behind the common
//! [`SceneProvider`](storyboard_interface::SceneProvider) trait:
//!
//! - **Gemini** ([`GeminiClient`]) - a schema-constrained `generateContent` call. The
//!   expected scene array shape is declared to the provider, which enforces it.
//! - **OpenAI** ([`OpenAIClient`]) - a chat completion in JSON-object mode. The
//!   contract lives in the instruction text only, so the adapter checks the
//!   `scenes` wrapper itself.
//!
//! Both adapters perform a single request per call. Neither retries.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_core::{DurationSpec, PromptBuilder};
//! use storyboard_interface::SceneProvider;
//! use storyboard_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new();
//! let prompt = PromptBuilder::new(client.contract())
//!     .build("Kong đại chiến Gấu khổng lồ", &DurationSpec::parse("1 phút"));
//! let scenes = client.generate(&prompt, "my-api-key").await?;
//! println!("{} scenes", scenes.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;
mod metrics;
mod openai;
mod response;

pub use config::{ProviderSettings, ProvidersConfig, StoryboardConfig};
pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiContent, GeminiGenerationConfig, GeminiPart,
    GeminiPromptFeedback, GeminiRequest, GeminiResponse, scene_array_schema,
};
pub use metrics::ProviderMetrics;
pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatRole, OpenAIClient, ResponseFormat,
};
pub use response::{extract_scene_array, extract_scenes_object};
