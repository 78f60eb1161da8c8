use storyboard_core::ProviderChoice;
use storyboard_error::{
    GenerationError, GenerationErrorKind, ProviderError, ProviderErrorKind, StoryboardError,
    StoryboardErrorKind, ValidationError, ValidationErrorKind,
};

#[test]
fn provider_error_display_includes_location() {
    let error = ProviderError::new(ProviderErrorKind::Transport("dns failure".to_string()));
    let display = format!("{}", error);

    assert!(display.contains("Provider Error: Request failed: dns failure"));
    assert!(display.contains("at line"));
    assert!(display.contains("error_test.rs"));
}

#[test]
fn raw_message_exposes_unclassified_text() {
    let kind = ProviderErrorKind::Api {
        status: 429,
        message: "Rate limit reached".to_string(),
    };
    assert_eq!(kind.raw_message(), "Rate limit reached");
    assert_eq!(
        ProviderError::malformed("missing scenes").kind.raw_message(),
        "missing scenes"
    );
}

#[test]
fn every_kind_has_a_fixed_message() {
    let cases = vec![
        (
            GenerationErrorKind::ProviderOverloaded,
            "Máy chủ AI đang quá tải. Vui lòng thử lại sau ít phút.",
        ),
        (
            GenerationErrorKind::InvalidCredential(ProviderChoice::Gemini),
            "API key Google Gemini không hợp lệ. Vui lòng kiểm tra lại API key.",
        ),
        (
            GenerationErrorKind::InvalidCredential(ProviderChoice::OpenAI),
            "API key OpenAI không chính xác. Vui lòng kiểm tra lại API key.",
        ),
        (
            GenerationErrorKind::RateLimited,
            "Bạn đã vượt quá giới hạn số lần gọi API. Vui lòng đợi một lát rồi thử lại.",
        ),
        (
            GenerationErrorKind::MalformedResponse("trailing comma".to_string()),
            "AI trả về dữ liệu không đúng định dạng. Vui lòng thử lại.",
        ),
        (
            GenerationErrorKind::ProviderRejected("Safety block".to_string()),
            "Yêu cầu bị nhà cung cấp AI từ chối: Safety block",
        ),
        (
            GenerationErrorKind::Unclassified("socket hang up".to_string()),
            "Không thể tạo kịch bản. Lỗi: socket hang up",
        ),
    ];

    for (kind, expected) in cases {
        assert_eq!(kind.message(), expected, "message mismatch for {:?}", kind);
        assert_eq!(kind.to_string(), expected);
    }
}

#[test]
fn validation_errors_are_local() {
    let error: GenerationError = ValidationError::new(ValidationErrorKind::MissingCredential(
        ProviderChoice::OpenAI,
    ))
    .into();

    assert!(error.kind.is_local());
    assert_eq!(error.kind.category(), "local_validation");
    assert!(error.message().contains("OpenAI"));
    assert!(!GenerationErrorKind::RateLimited.is_local());
}

#[test]
fn umbrella_error_wraps_kinds() {
    let err: StoryboardError = GenerationError::new(GenerationErrorKind::RateLimited).into();
    assert!(matches!(err.kind(), StoryboardErrorKind::Generation(_)));
    assert!(format!("{}", err).starts_with("Storyboard Error: Generation Error:"));
}
