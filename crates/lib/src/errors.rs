use thiserror::Error;

/// Custom error types for talking to the generative model.
#[derive(Error, Debug)]
pub enum QaError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider returned no text")]
    EmptyResponse,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("AI provider is misconfigured: {0}")]
    MisconfiguredProvider(String),
}
