//! # Application Configuration
//!
//! Defines the configuration for `docqa-server` and loads it in layers:
//! programmatic defaults, an optional `config.yml` (with `${VAR}`
//! substitution), then environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use docqa::{prompts::DEFAULT_PERSONA, ProviderConfig};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// The Gemini model used when configuration names none.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";
/// The largest accepted upload, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Sessions untouched for this long are discarded.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;
/// The configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    pub port: u16,
    /// Uploads above this size are rejected.
    pub max_upload_bytes: usize,
    /// Idle sessions are discarded after this many seconds. `0` keeps them
    /// until they are deleted.
    pub session_ttl_secs: u64,
    /// The persona prepended to every prompt.
    pub persona: String,
    /// The generative model behind the assistant.
    pub provider: ProviderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 9090,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            persona: DEFAULT_PERSONA.to_string(),
            provider: ProviderConfig {
                provider: "gemini".to_string(),
                api_url: None,
                api_key: None,
                model_name: DEFAULT_MODEL.to_string(),
            },
        }
    }
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from defaults, a file and the environment.
///
/// - With `config_path_override`, that file must exist. Otherwise `config.yml`
///   in the working directory is used when present.
/// - `PORT` overrides the port.
/// - Nested keys are overridden by `DOCQA_...` variables
///   (e.g. `DOCQA_PROVIDER__MODEL_NAME`).
/// - `AI_API_KEY` fills in the provider key when nothing else set it.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let mut builder = ConfigBuilder::builder()
        // Layer 1: Programmatic defaults.
        .set_default("port", i64::from(defaults.port))?
        .set_default("max_upload_bytes", defaults.max_upload_bytes as i64)?
        .set_default("session_ttl_secs", defaults.session_ttl_secs as i64)?
        .set_default("persona", defaults.persona)?
        .set_default("provider.provider", defaults.provider.provider)?
        .set_default("provider.model_name", defaults.provider.model_name)?;

    // Layer 2: Config file.
    let config_path = config_path_override.unwrap_or(DEFAULT_CONFIG_PATH);
    match read_and_substitute(config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{config_path}'."
            )));
        }
        None => info!("No '{config_path}' found. Using defaults and environment."),
    }

    let settings = builder
        // Layer 3: Top-level keys like PORT.
        .add_source(Environment::default())
        // Layer 4: Prefixed environment variables for nested overrides.
        .add_source(
            Environment::with_prefix("DOCQA")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    if config
        .provider
        .api_key
        .as_deref()
        .map_or(true, |key| key.trim().is_empty())
    {
        config.provider.api_key = env::var("AI_API_KEY").ok().filter(|key| !key.is_empty());
    }

    Ok(config)
}
