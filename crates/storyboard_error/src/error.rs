//! Top-level error wrapper types.

use crate::{
    ConfigError, ExportError, GenerationError, JsonError, ProviderError, ValidationError,
};

/// Every error a Storyboard operation can raise.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, ConfigError};
///
/// let err: StoryboardError = ConfigError::new("bad endpoint").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Local input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Raw provider failure
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Normalized generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Export target failure
    #[from(ExportError)]
    Export(ExportError),
}

/// Storyboard error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
