//! OpenAI chat-completion adapter.
//!
//! The scene contract is carried by the instruction text alone. The provider is asked
//! for JSON-object output, and the adapter checks that the object wraps a `scenes` array.

mod client;
mod dto;

pub use client::OpenAIClient;
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatRole, ResponseFormat,
};
