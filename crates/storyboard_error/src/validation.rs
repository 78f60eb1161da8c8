//! Local validation errors, raised before any network call.

use storyboard_core::ProviderChoice;

/// Input problems caught before a request is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The content idea is empty or whitespace
    #[display("Content idea is blank")]
    BlankIdea,
    /// No credential is set for the selected provider
    #[display("No API key set for provider {}", _0)]
    MissingCredential(ProviderChoice),
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::BlankIdea);
/// assert!(err.to_string().contains("Content idea is blank"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
