//! # AI Provider Factory
//!
//! Builds a provider instance from the configured provider settings and the
//! API key supplied by the user. Providers are cheap to build, so the server
//! creates one per question with whatever key the browser sent.

use crate::{
    errors::QaError,
    providers::ai::{
        gemini::{gemini_api_url, GeminiProvider},
        local::LocalAiProvider,
        AiProvider,
    },
    types::ProviderConfig,
};
use tracing::debug;

/// Creates an AI provider for one request.
///
/// A non-blank `api_key` takes precedence over the key from configuration.
pub fn create_provider(
    config: &ProviderConfig,
    api_key: Option<&str>,
) -> Result<Box<dyn AiProvider>, QaError> {
    let api_key = api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| {
            config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
        });

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = api_key.ok_or(QaError::MissingApiKey)?;
            let api_url = config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| gemini_api_url(&config.model_name));
            debug!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let api_url = config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .ok_or_else(|| {
                    QaError::MisconfiguredProvider(
                        "api_url is required for the local provider".to_string(),
                    )
                })?;
            debug!("Configuring local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                api_key,
                Some(config.model_name.clone()),
            )?)
        }
        other => {
            return Err(QaError::MisconfiguredProvider(format!(
                "unsupported provider type '{other}'"
            )))
        }
    };

    Ok(provider)
}
