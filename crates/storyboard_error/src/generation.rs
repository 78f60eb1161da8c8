//! Normalized generation failures.
//!
//! Every failed generation ends in exactly one [`GenerationErrorKind`], and every
//! kind maps to one fixed, localized sentence that can be shown to the user as is.

use crate::ValidationErrorKind;
use storyboard_core::ProviderChoice;

/// The user-facing failure taxonomy of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// Input rejected before any network call
    LocalValidation(ValidationErrorKind),
    /// The provider's answer was not valid scene JSON (detail is for logs only)
    MalformedResponse(String),
    /// The provider reported it is overloaded or unavailable
    ProviderOverloaded,
    /// The provider rejected the API key
    InvalidCredential(ProviderChoice),
    /// The provider refused the request with its own message
    ProviderRejected(String),
    /// The provider throttled the request
    RateLimited,
    /// Anything else, carrying the original message verbatim
    Unclassified(String),
}

impl GenerationErrorKind {
    /// The fixed Vietnamese sentence shown to the user for this failure.
    pub fn message(&self) -> String {
        match self {
            GenerationErrorKind::LocalValidation(ValidationErrorKind::BlankIdea) => {
                "Vui lòng nhập nội dung hoặc ý tưởng trước khi tạo kịch bản.".to_string()
            }
            GenerationErrorKind::LocalValidation(ValidationErrorKind::MissingCredential(
                provider,
            )) => format!(
                "Vui lòng nhập API key {} trước khi tạo kịch bản.",
                provider.display_name()
            ),
            GenerationErrorKind::MalformedResponse(_) => {
                "AI trả về dữ liệu không đúng định dạng. Vui lòng thử lại.".to_string()
            }
            GenerationErrorKind::ProviderOverloaded => {
                "Máy chủ AI đang quá tải. Vui lòng thử lại sau ít phút.".to_string()
            }
            GenerationErrorKind::InvalidCredential(ProviderChoice::Gemini) => {
                "API key Google Gemini không hợp lệ. Vui lòng kiểm tra lại API key.".to_string()
            }
            GenerationErrorKind::InvalidCredential(ProviderChoice::OpenAI) => {
                "API key OpenAI không chính xác. Vui lòng kiểm tra lại API key.".to_string()
            }
            GenerationErrorKind::ProviderRejected(message) => {
                format!("Yêu cầu bị nhà cung cấp AI từ chối: {}", message)
            }
            GenerationErrorKind::RateLimited => {
                "Bạn đã vượt quá giới hạn số lần gọi API. Vui lòng đợi một lát rồi thử lại."
                    .to_string()
            }
            GenerationErrorKind::Unclassified(message) => {
                format!("Không thể tạo kịch bản. Lỗi: {}", message)
            }
        }
    }

    /// Short machine-readable label, used for logs and metrics.
    pub fn category(&self) -> &'static str {
        match self {
            GenerationErrorKind::LocalValidation(_) => "local_validation",
            GenerationErrorKind::MalformedResponse(_) => "malformed_response",
            GenerationErrorKind::ProviderOverloaded => "provider_overloaded",
            GenerationErrorKind::InvalidCredential(_) => "invalid_credential",
            GenerationErrorKind::ProviderRejected(_) => "provider_rejected",
            GenerationErrorKind::RateLimited => "rate_limited",
            GenerationErrorKind::Unclassified(_) => "unclassified",
        }
    }

    /// True for failures that never reached the network.
    pub fn is_local(&self) -> bool {
        matches!(self, GenerationErrorKind::LocalValidation(_))
    }
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<ValidationErrorKind> for GenerationErrorKind {
    fn from(kind: ValidationErrorKind) -> Self {
        GenerationErrorKind::LocalValidation(kind)
    }
}

/// Normalized generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited);
/// assert!(err.message().contains("giới hạn"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The user-facing sentence for this failure.
    pub fn message(&self) -> String {
        self.kind.message()
    }
}

impl From<crate::ValidationError> for GenerationError {
    #[track_caller]
    fn from(err: crate::ValidationError) -> Self {
        Self::new(GenerationErrorKind::LocalValidation(err.kind))
    }
}
