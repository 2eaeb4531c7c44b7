use crate::{errors::QaError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct LocalAiRequest<'a> {
    messages: Vec<LocalAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct LocalAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct LocalAiResponse {
    choices: Vec<LocalAiChoice>,
}

#[derive(Deserialize, Debug)]
struct LocalAiChoice {
    message: LocalAiMessage,
}

// --- Local Provider implementation ---

/// A provider for a local or OpenAI-compatible `chat/completions` API.
///
/// The assembled prompt already carries the persona, so it is sent as a single
/// user message.
#[derive(Clone, Debug)]
pub struct LocalAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl LocalAiProvider {
    /// Creates a new `LocalAiProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, QaError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(QaError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for LocalAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, QaError> {
        let request_body = LocalAiRequest {
            messages: vec![LocalAiMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            model: self.model.as_deref(),
            stream: false,
        };

        let mut request_builder = self.client.post(&self.api_url);

        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(QaError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(QaError::AiApi(format!("{status}: {error_text}")));
        }

        let local_ai_response: LocalAiResponse = response
            .json()
            .await
            .map_err(QaError::AiDeserialization)?;

        local_ai_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or(QaError::EmptyResponse)
    }
}
