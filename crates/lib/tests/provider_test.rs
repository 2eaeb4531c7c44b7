//! # Provider HTTP Tests
//!
//! Runs the Gemini and OpenAI-compatible providers against a `wiremock`
//! server to check request shape and response handling.

use docqa::{
    chat::answer,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    QaError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_gemini_sends_prompt_and_reads_first_candidate() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(query_param("key", "secret-key"))
        .and(body_json(json!({
            "contents": [{ "parts": [{ "text": "the prompt" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "the answer" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(
        format!("{}/models/gemini-test:generateContent", server.uri()),
        "secret-key".to_string(),
    )?;
    let text = provider.generate("the prompt").await?;

    assert_eq!(text, "the answer");
    Ok(())
}

#[tokio::test]
async fn test_gemini_error_status_becomes_api_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "bad-key".to_string())?;
    let result = provider.generate("hi").await;

    match result {
        Err(QaError::AiApi(message)) => assert!(message.contains("API key not valid")),
        other => panic!("expected AiApi error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_gemini_without_candidates_is_empty_response() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "key".to_string())?;
    assert!(matches!(
        provider.generate("hi").await,
        Err(QaError::EmptyResponse)
    ));
    Ok(())
}

#[tokio::test]
async fn test_answer_turns_failures_into_error_string() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "key".to_string())?;
    let text = answer(&provider, "hi").await;

    assert!(text.starts_with("Error generating response: "));
    assert!(text.contains("quota"));
    Ok(())
}

#[tokio::test]
async fn test_local_provider_uses_bearer_auth() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer local-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "local answer" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = LocalAiProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        Some("local-key".to_string()),
        Some("test-model".to_string()),
    )?;

    assert_eq!(provider.generate("prompt").await?, "local answer");
    Ok(())
}

#[test]
fn test_gemini_rejects_blank_key() {
    let result = GeminiProvider::new("http://localhost".to_string(), "  ".to_string());
    assert!(matches!(result, Err(QaError::MissingApiKey)));
}
