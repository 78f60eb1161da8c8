//! Provider configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from storyboard.toml)
//! - User overrides (./storyboard.toml or ~/.config/storyboard/storyboard.toml)
//! - Automatic merging with user values taking precedence
//!
//! API keys are never read from configuration; they are supplied per call.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyboard_core::{PromptStyle, ProviderChoice};
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Settings for one provider.
///
/// # Example
///
/// ```toml
/// [providers.openai]
/// model = "gpt-4o-mini"
/// endpoint = "https://api.openai.com/v1/chat/completions"
/// prompt_style = "structured"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Model identifier sent with each request
    pub model: String,

    /// Base URL (Gemini) or full completions URL (OpenAI)
    pub endpoint: String,

    /// Shape of the per-scene prompt to ask for
    #[serde(default)]
    pub prompt_style: PromptStyle,
}

/// The per-provider settings table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Schema-constrained provider
    pub gemini: ProviderSettings,
    /// Chat-completion provider
    pub openai: ProviderSettings,
}

/// Top-level Storyboard configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard_core::ProviderChoice;
/// use storyboard_models::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("Gemini model: {}", config.settings(ProviderChoice::Gemini).model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoryboardConfig {
    /// Provider settings
    pub providers: ProvidersConfig,
}

impl StoryboardConfig {
    /// The bundled defaults, without any user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> StoryboardResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (storyboard.toml shipped with the library)
    /// 2. User config in home directory (~/.config/storyboard/storyboard.toml)
    /// 3. User config in current directory (./storyboard.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        Self::build(builder)
    }

    /// Settings for the given provider.
    pub fn settings(&self, provider: ProviderChoice) -> &ProviderSettings {
        match provider {
            ProviderChoice::Gemini => &self.providers.gemini,
            ProviderChoice::OpenAI => &self.providers.openai,
        }
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryboardResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
