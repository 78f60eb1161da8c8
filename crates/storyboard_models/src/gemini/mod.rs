//! Google Gemini schema-constrained adapter.
//!
//! Requests declare a response schema for the scene array, so the provider itself
//! enforces field presence and types. The returned text is parsed as a bare JSON array.

mod client;
mod dto;
mod schema;

pub use client::GeminiClient;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiPromptFeedback,
    GeminiRequest, GeminiResponse,
};
pub use schema::scene_array_schema;
