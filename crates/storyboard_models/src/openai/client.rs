//! OpenAI chat-completion client.

use super::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat};
use crate::{ProviderMetrics, ProviderSettings, extract_scenes_object};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use storyboard_core::{BuiltPrompt, PromptContract, PromptStyle, ProviderChoice, ResponseEnvelope};
use storyboard_error::{ProviderError, ProviderErrorKind, ProviderResult};
use storyboard_interface::{RawScenes, SceneProvider};
use tracing::{debug, error, instrument, warn};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completion OpenAI adapter.
///
/// Holds no credential: the API key is sent as a bearer token on each
/// [`SceneProvider::generate`] call.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    endpoint: String,
    model: String,
    style: PromptStyle,
}

impl Default for OpenAIClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAIClient {
    /// Creates a client for the public OpenAI API with the default model.
    pub fn new() -> Self {
        debug!("Creating new OpenAI client");
        Self {
            client: Client::new(),
            endpoint: OPENAI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            style: PromptStyle::Structured,
        }
    }

    /// Creates a client from configured provider settings.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self::new()
            .with_endpoint(&settings.endpoint)
            .with_model(&settings.model)
            .with_prompt_style(settings.prompt_style)
    }

    /// Overrides the full completions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the prompt shape requested in the instructions.
    pub fn with_prompt_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    /// Converts a built prompt into a chat completion request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request builder rejects its inputs.
    pub fn build_request(&self, prompt: &BuiltPrompt) -> ProviderResult<ChatCompletionRequest> {
        ChatCompletionRequest::builder()
            .model(self.model.as_str())
            .messages(vec![
                ChatMessage::system(prompt.system_instruction()),
                ChatMessage::user(prompt.user_instruction()),
            ])
            .response_format(ResponseFormat::json_object())
            .build()
            .map_err(|e| ProviderError::malformed(format!("Builder error: {}", e)))
    }

    /// Sends a request to the chat completions endpoint.
    #[instrument(skip(self, request, credential), fields(model = %self.model))]
    pub async fn generate_openai(
        &self,
        request: &ChatCompletionRequest,
        credential: &str,
    ) -> ProviderResult<ChatCompletionResponse> {
        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: Self::error_message(status.as_u16(), &body),
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            ProviderError::malformed(format!("Failed to parse response: {}", e))
        })
    }

    /// The nested `error.message` of an error body, else the body, else the status.
    fn error_message(status: u16, body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| format!("OpenAI API request failed with status {}", status))
    }

    async fn generate_internal(
        &self,
        prompt: &BuiltPrompt,
        credential: &str,
    ) -> ProviderResult<RawScenes> {
        let request = self.build_request(prompt)?;
        let response = self.generate_openai(&request, credential).await?;

        let Some(content) = response.first_content() else {
            warn!("OpenAI response carried no message content");
            return Err(ProviderError::malformed(
                "response carried no message content",
            ));
        };

        extract_scenes_object(content)
    }
}

#[async_trait]
impl SceneProvider for OpenAIClient {
    #[instrument(skip(self, prompt, credential), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, prompt: &BuiltPrompt, credential: &str) -> ProviderResult<RawScenes> {
        let started = Instant::now();
        let result = self.generate_internal(prompt, credential).await;

        let metrics = ProviderMetrics::get();
        match &result {
            Ok(scenes) => {
                debug!(count = scenes.len(), "OpenAI returned scenes");
                metrics.record_request("openai", &self.model, started.elapsed().as_secs_f64());
            }
            Err(e) => metrics.record_error("openai", &self.model, &e.kind),
        }

        result
    }

    fn provider(&self) -> ProviderChoice {
        ProviderChoice::OpenAI
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn contract(&self) -> PromptContract {
        PromptContract::new(self.style, ResponseEnvelope::ScenesObject)
    }
}
