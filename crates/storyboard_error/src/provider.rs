//! Raw provider adapter failures.
//!
//! These carry whatever the provider or transport reported, unclassified. They are
//! turned into user-facing [`GenerationError`](crate::GenerationError)s by the
//! normalizer in the `storyboard` crate.

/// Provider-call failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The request never produced an HTTP response
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// The provider answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, or the nested error message extracted from it
        message: String,
    },
    /// The provider answered, but not with the expected JSON shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
}

impl ProviderErrorKind {
    /// The raw text the normalizer classifies.
    pub fn raw_message(&self) -> &str {
        match self {
            ProviderErrorKind::Transport(message) => message,
            ProviderErrorKind::Api { message, .. } => message,
            ProviderErrorKind::MalformedResponse(message) => message,
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     status: 401,
///     message: "Incorrect API key provided".to_string(),
/// });
/// assert!(err.to_string().contains("HTTP 401 error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`ProviderErrorKind::MalformedResponse`] error.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::MalformedResponse(message.into()))
    }
}

/// Result type for provider adapter calls.
pub type ProviderResult<T> = Result<T, ProviderError>;
