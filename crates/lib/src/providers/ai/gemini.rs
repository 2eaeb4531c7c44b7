use crate::{errors::QaError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// The base URL of the Gemini `generateContent` endpoints.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Builds the `generateContent` URL for a Gemini model name.
pub fn gemini_api_url(model_name: &str) -> String {
    format!("{GEMINI_API_BASE}/{model_name}:generateContent")
}

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, QaError> {
        if api_key.trim().is_empty() {
            return Err(QaError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .build()
            .map_err(QaError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, QaError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        // The key travels as a query parameter, so errors are stripped of their URL.
        debug!(url = %self.api_url, prompt_chars = prompt.chars().count(), "Calling Gemini.");
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| QaError::AiRequest(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(QaError::AiApi(format!("{status}: {error_text}")));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| QaError::AiDeserialization(e.without_url()))?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(QaError::EmptyResponse)
    }
}
