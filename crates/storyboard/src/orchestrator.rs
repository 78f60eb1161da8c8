//! The generation orchestrator.
//!
//! A generation walks `Idle -> Validating -> Dispatching -> {Succeeded, Failed} -> Idle`.
//! Validation failures short-circuit to `Failed` without touching the network;
//! provider failures go through [`normalize`](crate::normalize) exactly once.

use crate::{normalize, parse_scene_batch};
use std::collections::HashMap;
use std::sync::Arc;
use storyboard_core::{Credentials, DurationSpec, PromptBuilder, ProviderChoice, Scene};
use storyboard_error::{
    GenerationError, GenerationErrorKind, ValidationError, ValidationErrorKind,
};
use storyboard_interface::SceneProvider;
use storyboard_models::{GeminiClient, OpenAIClient, StoryboardConfig};
use tracing::{debug, error, info, instrument, warn};

/// The single public outcome of a generation: scenes, or one normalized error.
pub type GenerationOutcome = Result<Vec<Scene>, GenerationError>;

/// Lifecycle states of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationState {
    /// Nothing in flight
    #[display("idle")]
    Idle,
    /// Checking the idea and credential locally
    #[display("validating")]
    Validating,
    /// Waiting on the provider
    #[display("dispatching")]
    Dispatching,
    /// Scenes are available
    #[display("succeeded")]
    Succeeded,
    /// A normalized error is available
    #[display("failed")]
    Failed,
}

/// Dispatches generation requests to the adapter registered for each provider.
///
/// `Generator` keeps no state between calls; every [`run`](Generator::run) is an
/// independent request/response cycle.
///
/// # Examples
///
/// ```no_run
/// use storyboard::Generator;
/// use storyboard_core::{Credentials, ProviderChoice};
/// use storyboard_models::StoryboardConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = Generator::from_config(&StoryboardConfig::load()?);
/// let credentials = Credentials::default().with_gemini("my-key");
///
/// match generator
///     .run("Kong thức dậy giữa thành phố", "1 phút", ProviderChoice::Gemini, &credentials)
///     .await
/// {
///     Ok(scenes) => println!("{} scenes", scenes.len()),
///     Err(e) => eprintln!("{}", e.message()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Generator {
    providers: HashMap<ProviderChoice, Arc<dyn SceneProvider>>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut providers: Vec<_> = self
            .providers
            .iter()
            .map(|(choice, adapter)| (*choice, adapter.model_name().to_string()))
            .collect();
        providers.sort();
        f.debug_struct("Generator")
            .field("providers", &providers)
            .finish()
    }
}

impl Generator {
    /// A generator with no adapters registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator with both HTTP adapters built from configuration.
    pub fn from_config(config: &StoryboardConfig) -> Self {
        Self::new()
            .with_provider(GeminiClient::from_settings(
                config.settings(ProviderChoice::Gemini),
            ))
            .with_provider(OpenAIClient::from_settings(
                config.settings(ProviderChoice::OpenAI),
            ))
    }

    /// Registers an adapter under the provider it reports, replacing any previous one.
    pub fn with_provider(self, adapter: impl SceneProvider + 'static) -> Self {
        self.with_shared_provider(Arc::new(adapter))
    }

    /// Registers a shared adapter under the provider it reports.
    pub fn with_shared_provider(mut self, adapter: Arc<dyn SceneProvider>) -> Self {
        debug!(provider = %adapter.provider(), model = adapter.model_name(), "Registering adapter");
        self.providers.insert(adapter.provider(), adapter);
        self
    }

    /// The adapter registered for `provider`.
    pub fn adapter(&self, provider: ProviderChoice) -> Option<&Arc<dyn SceneProvider>> {
        self.providers.get(&provider)
    }

    /// Runs one generation.
    ///
    /// Fails without any network call when the idea is blank or the credential bound
    /// to `provider` is missing. Otherwise builds the prompt for the adapter's
    /// contract, awaits the adapter, and checks the returned scenes structurally.
    ///
    /// Every run settles back to [`GenerationState::Idle`] once its outcome is known.
    #[instrument(skip(self, idea, provider, credentials), fields(provider = %provider))]
    pub async fn run(
        &self,
        idea: &str,
        duration_text: &str,
        provider: ProviderChoice,
        credentials: &Credentials,
    ) -> GenerationOutcome {
        let outcome = self
            .attempt(idea, duration_text, provider, credentials)
            .await;
        debug!(state = %GenerationState::Idle, ok = outcome.is_ok(), "Generation settled");
        outcome
    }

    async fn attempt(
        &self,
        idea: &str,
        duration_text: &str,
        provider: ProviderChoice,
        credentials: &Credentials,
    ) -> GenerationOutcome {
        debug!(state = %GenerationState::Validating, "Generation started");

        let credential = match validate(idea, provider, credentials) {
            Ok(credential) => credential,
            Err(e) => {
                warn!(state = %GenerationState::Failed, reason = %e.kind, "Rejected before dispatch");
                return Err(e.into());
            }
        };

        let Some(adapter) = self.adapter(provider) else {
            error!(state = %GenerationState::Failed, "No adapter registered");
            return Err(GenerationError::new(GenerationErrorKind::Unclassified(
                format!("No adapter registered for provider {}", provider),
            )));
        };

        let duration = DurationSpec::parse(duration_text);
        let prompt = PromptBuilder::new(adapter.contract()).build(idea, &duration);

        debug!(
            state = %GenerationState::Dispatching,
            model = adapter.model_name(),
            scene_count = ?duration.required_scene_count(),
            "Dispatching to provider"
        );

        let outcome = match adapter.generate(&prompt, credential).await {
            Ok(raw) => parse_scene_batch(raw),
            Err(e) => {
                error!(error = %e, "Provider call failed");
                Err(normalize(&e))
            }
        };

        match &outcome {
            Ok(scenes) => info!(
                state = %GenerationState::Succeeded,
                count = scenes.len(),
                "Generation succeeded"
            ),
            Err(e) => warn!(
                state = %GenerationState::Failed,
                category = e.kind.category(),
                "Generation failed"
            ),
        }

        outcome
    }
}

/// Local checks, in order: blank idea, then missing credential.
fn validate<'a>(
    idea: &str,
    provider: ProviderChoice,
    credentials: &'a Credentials,
) -> Result<&'a str, ValidationError> {
    if idea.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::BlankIdea));
    }

    credentials
        .for_provider(provider)
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingCredential(provider)))
}
