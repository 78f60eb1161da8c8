// Tests for the chat-completion OpenAI adapter against a mock server.

use serde_json::json;
use storyboard_core::{BuiltPrompt, PromptStyle, ResponseEnvelope};
use storyboard_error::ProviderErrorKind;
use storyboard_interface::SceneProvider;
use storyboard_models::OpenAIClient;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new().with_endpoint(format!("{}/v1/chat/completions", server.uri()))
}

fn prompt() -> BuiltPrompt {
    BuiltPrompt::new("system contract", "user request")
}

fn completion(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

async fn mount_content(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(content))))
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_bearer_token_and_json_mode() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "system contract"},
                {"role": "user", "content": "user request"}
            ],
            "response_format": {"type": "json_object"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(
            r#"{"scenes": [{"scene": 1, "description": "a", "prompt": "b"}]}"#
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let scenes = client_for(&server).generate(&prompt(), "sk-test").await?;
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0]["scene"], 1);
    Ok(())
}

#[tokio::test]
async fn empty_scenes_array_succeeds() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_content(&server, r#"{"scenes": []}"#).await;

    let scenes = client_for(&server).generate(&prompt(), "sk").await?;
    assert!(scenes.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_scenes_key_is_malformed() {
    let server = MockServer::start().await;
    mount_content(&server, r#"{"foo": []}"#).await;

    let err = client_for(&server).generate(&prompt(), "sk").await.unwrap_err();
    assert!(matches!(err.kind, ProviderErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn non_sequence_scenes_is_malformed() {
    let server = MockServer::start().await;
    mount_content(&server, r#"{"scenes": "none"}"#).await;

    let err = client_for(&server).generate(&prompt(), "sk").await.unwrap_err();
    assert!(matches!(err.kind, ProviderErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn null_content_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(null))))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&prompt(), "sk").await.unwrap_err();
    assert!(matches!(err.kind, ProviderErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn error_status_surfaces_nested_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided: sk-bad.",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&prompt(), "sk-bad")
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        ProviderErrorKind::Api {
            status: 401,
            message: "Incorrect API key provided: sk-bad.".to_string(),
        }
    );
}

#[test]
fn contract_wraps_scenes_in_object() {
    let client = OpenAIClient::new();
    assert_eq!(client.contract().envelope(), &ResponseEnvelope::ScenesObject);
    assert_eq!(client.contract().style(), &PromptStyle::Structured);
}

#[test]
fn request_builder_sets_json_mode() {
    let request = OpenAIClient::new()
        .with_model("gpt-4o")
        .build_request(&prompt())
        .unwrap();

    assert_eq!(request.model(), "gpt-4o");
    assert_eq!(request.messages().len(), 2);
    assert!(request.response_format().is_some());
}
