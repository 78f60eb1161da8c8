//! Gemini REST client.

use super::{GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse, scene_array_schema};
use crate::{ProviderMetrics, ProviderSettings, extract_scene_array};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use storyboard_core::{BuiltPrompt, PromptContract, PromptStyle, ProviderChoice, ResponseEnvelope};
use storyboard_error::{ProviderError, ProviderErrorKind, ProviderResult};
use storyboard_interface::{RawScenes, SceneProvider};
use tracing::{debug, error, instrument, warn};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Schema-constrained Gemini adapter.
///
/// Holds no credential: the API key is passed to each [`SceneProvider::generate`] call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    style: PromptStyle,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    /// Creates a client for the public Gemini API with the default model.
    pub fn new() -> Self {
        debug!("Creating new Gemini client");
        Self {
            client: Client::new(),
            endpoint: GEMINI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            style: PromptStyle::Plain,
        }
    }

    /// Creates a client from configured provider settings.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self::new()
            .with_endpoint(&settings.endpoint)
            .with_model(&settings.model)
            .with_prompt_style(settings.prompt_style)
    }

    /// Overrides the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the model. A leading "models/" is accepted and stripped.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.model = model
            .strip_prefix("models/")
            .map(str::to_string)
            .unwrap_or(model);
        self
    }

    /// Overrides the prompt shape declared in the response schema.
    pub fn with_prompt_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Converts a built prompt into a `generateContent` request body.
    pub fn build_request(&self, prompt: &BuiltPrompt) -> GeminiRequest {
        GeminiRequest::new(
            GeminiContent::system(prompt.system_instruction()),
            vec![GeminiContent::user(prompt.user_instruction())],
            GeminiGenerationConfig::json(scene_array_schema(self.style)),
        )
    }

    /// Sends a request to the Gemini API.
    #[instrument(skip(self, request, credential), fields(model = %self.model))]
    pub async fn generate_gemini(
        &self,
        request: &GeminiRequest,
        credential: &str,
    ) -> ProviderResult<GeminiResponse> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", credential)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            ProviderError::malformed(format!("Failed to parse response: {}", e))
        })
    }

    async fn generate_internal(
        &self,
        prompt: &BuiltPrompt,
        credential: &str,
    ) -> ProviderResult<RawScenes> {
        let request = self.build_request(prompt);
        let response = self.generate_gemini(&request, credential).await?;

        let Some(text) = response.text() else {
            let reason = response
                .block_reason()
                .or_else(|| {
                    response
                        .candidates()
                        .first()
                        .and_then(|c| c.finish_reason().as_deref())
                })
                .unwrap_or("no candidates");
            warn!(reason, "Gemini response carried no text");
            return Err(ProviderError::malformed(format!(
                "response carried no text ({})",
                reason
            )));
        };

        extract_scene_array(&text)
    }
}

#[async_trait]
impl SceneProvider for GeminiClient {
    #[instrument(skip(self, prompt, credential), fields(provider = "gemini", model = %self.model))]
    async fn generate(&self, prompt: &BuiltPrompt, credential: &str) -> ProviderResult<RawScenes> {
        let started = Instant::now();
        let result = self.generate_internal(prompt, credential).await;

        let metrics = ProviderMetrics::get();
        match &result {
            Ok(scenes) => {
                debug!(count = scenes.len(), "Gemini returned scenes");
                metrics.record_request("gemini", &self.model, started.elapsed().as_secs_f64());
            }
            Err(e) => metrics.record_error("gemini", &self.model, &e.kind),
        }

        result
    }

    fn provider(&self) -> ProviderChoice {
        ProviderChoice::Gemini
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn contract(&self) -> PromptContract {
        PromptContract::new(self.style, ResponseEnvelope::Array)
    }
}
