//! Provider selection and per-provider credentials.

use serde::{Deserialize, Serialize};

/// The AI provider a generation request is dispatched to.
///
/// Each variant is bound to exactly one credential slot in [`Credentials`] and one
/// provider adapter.
///
/// # Examples
///
/// ```
/// use storyboard_core::ProviderChoice;
/// use std::str::FromStr;
///
/// assert_eq!(ProviderChoice::from_str("openai").unwrap(), ProviderChoice::OpenAI);
/// assert_eq!(ProviderChoice::Gemini.to_string(), "gemini");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderChoice {
    /// Google Gemini, called with a server-enforced response schema
    #[default]
    Gemini,
    /// OpenAI chat completions, called in JSON-object mode
    OpenAI,
}

impl ProviderChoice {
    /// Human-readable provider name for user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderChoice::Gemini => "Google Gemini",
            ProviderChoice::OpenAI => "OpenAI",
        }
    }
}

/// Credentials owned by the caller, one optional slot per provider.
///
/// Blank strings are treated the same as absent credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    gemini: Option<String>,
    openai: Option<String>,
}

impl Credentials {
    /// Creates a credential set from the two optional slots.
    pub fn new(gemini: Option<String>, openai: Option<String>) -> Self {
        Self { gemini, openai }
    }

    /// Sets the Gemini API key.
    pub fn with_gemini(mut self, key: impl Into<String>) -> Self {
        self.gemini = Some(key.into());
        self
    }

    /// Sets the OpenAI API key.
    pub fn with_openai(mut self, key: impl Into<String>) -> Self {
        self.openai = Some(key.into());
        self
    }

    /// Returns the credential bound to `provider`, if present and not blank.
    pub fn for_provider(&self, provider: ProviderChoice) -> Option<&str> {
        let slot = match provider {
            ProviderChoice::Gemini => self.gemini.as_deref(),
            ProviderChoice::OpenAI => self.openai.as_deref(),
        };
        slot.map(str::trim).filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini", &self.gemini.as_ref().map(|_| "<redacted>"))
            .field("openai", &self.openai.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
