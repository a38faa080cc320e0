use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use biosumm::llm::provider::CompletionClient;
use biosumm::llm::providers::OpenAIClient;
use biosumm::types::error::Error;
use biosumm::types::llm::{ChatMessage, ClientConfig, CompletionParams, CompletionResult, FinishReason};

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new(ClientConfig {
        api_endpoint: server.uri(),
        api_key: Some("test-key".to_string()),
        ..ClientConfig::default()
    })
    .unwrap()
}

fn messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a helpful assistant for text summarization."),
        ChatMessage::user("Create a short summary of the following text: some text"),
    ]
}

fn params() -> CompletionParams {
    CompletionParams { max_tokens: 100, temperature: 0.5 }
}

#[tokio::test]
async fn parses_content_and_finish_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 100,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "A short summary." },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).complete(&messages(), &params()).await.unwrap();
    assert_eq!(
        result,
        CompletionResult {
            content: "A short summary.".to_string(),
            finish_reason: FinishReason::Complete,
        }
    );
}

#[tokio::test]
async fn length_finish_reason_signals_truncation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "Cut off mid" },
                "finish_reason": "length"
            }]
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).complete(&messages(), &params()).await.unwrap();
    assert_eq!(result.finish_reason, FinishReason::Length);
}

#[tokio::test]
async fn non_success_response_fails_once_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server).complete(&messages(), &params()).await.unwrap_err();
    match error {
        Error::CompletionFailed(detail) => assert!(detail.contains("upstream exploded")),
        other => panic!("expected CompletionFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_params_are_rejected_before_the_network() {
    let server = MockServer::start().await;
    // No mock mounted: a request would fail loudly.
    let bad = CompletionParams { max_tokens: 0, temperature: 0.5 };
    let error = client_for(&server).complete(&messages(), &bad).await.unwrap_err();
    assert!(matches!(error, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn missing_api_key_is_a_config_error() {
    let server = MockServer::start().await;
    let client = OpenAIClient::new(ClientConfig {
        api_endpoint: server.uri(),
        api_key: None,
        ..ClientConfig::default()
    })
    .unwrap();

    let error = client.complete(&messages(), &params()).await.unwrap_err();
    assert!(matches!(error, Error::InvalidArgument(_)));
}
