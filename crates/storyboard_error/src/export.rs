//! Export error types.

/// Failure to hand generated text to an export target.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} ({}) at line {} in {}", message, target, line, file)]
pub struct ExportError {
    /// What went wrong
    pub message: String,
    /// File name or target that was being written
    pub target: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError for `target` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::ExportError;
    ///
    /// let err = ExportError::new("generated_script.json", "Permission denied");
    /// assert!(err.to_string().contains("generated_script.json"));
    /// ```
    #[track_caller]
    pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            target: target.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
