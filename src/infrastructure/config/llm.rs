//! LLM provider configuration.
//!
//! Provides configuration for the language model that backs the
//! classification gateway.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// LLM provider configuration.
///
/// Configures which LLM provider to use and provider-specific settings.
/// API keys are read from environment variables (`ANTHROPIC_API_KEY` or
/// `OPENAI_API_KEY`) at runtime, never from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// LLM provider to use for classification.
    ///
    /// Defaults to OpenAI.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Per-request timeout in seconds.
    ///
    /// A request that exceeds it counts as a provider failure. Defaults to 60.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Anthropic-specific settings.
    ///
    /// Used when `provider` is set to `anthropic`.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// OpenAI-specific settings.
    ///
    /// Used when `provider` is set to `openai`.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            timeout_secs: default_timeout_secs(),
            anthropic: AnthropicConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl LlmConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Model name for the active provider.
    #[must_use]
    pub fn active_model(&self) -> &str {
        match self.provider {
            LlmProvider::Anthropic => &self.anthropic.model,
            LlmProvider::OpenAi => &self.openai.model,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }

        validate_provider(
            &self.anthropic.model,
            self.anthropic.temperature,
            1.0,
            self.anthropic.max_tokens,
            self.anthropic.base_url.as_deref(),
        )?;
        validate_provider(
            &self.openai.model,
            self.openai.temperature,
            2.0,
            self.openai.max_tokens,
            self.openai.base_url.as_deref(),
        )
    }
}

fn validate_provider(
    model: &str,
    temperature: f64,
    max_temperature: f64,
    max_tokens: usize,
    base_url: Option<&str>,
) -> Result<()> {
    if model.trim().is_empty() {
        return Err(ConfigError::MissingField { field: "model" }.into());
    }
    if !(0.0..=max_temperature).contains(&temperature) {
        return Err(ConfigError::InvalidValue {
            field: "temperature",
            reason: format!("must be between 0.0 and {max_temperature}, got {temperature}"),
        }
        .into());
    }
    if max_tokens == 0 {
        return Err(ConfigError::InvalidValue {
            field: "max_tokens",
            reason: "must be greater than 0".into(),
        }
        .into());
    }
    if let Some(base_url) = base_url {
        let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            }
            .into());
        }
    }
    Ok(())
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Anthropic Claude models.
    Anthropic,
    /// OpenAI GPT models.
    #[default]
    OpenAi,
}

impl LlmProvider {
    /// Environment variable holding the provider's API key.
    #[must_use]
    pub const fn api_key_env(self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anthropic => f.write_str("anthropic"),
            Self::OpenAi => f.write_str("openai"),
        }
    }
}

/// Anthropic-specific configuration.
///
/// Settings for Anthropic Claude API. Requires `ANTHROPIC_API_KEY`
/// environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// Model identifier.
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Sampling temperature for generation.
    ///
    /// Lower values produce more deterministic labels. Defaults to 0.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response.
    ///
    /// Three short labels fit comfortably. Defaults to 256.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Override for the Messages API endpoint.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}

/// OpenAI-specific configuration.
///
/// Settings for OpenAI API. Requires `OPENAI_API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Model identifier.
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Sampling temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Override for the Chat Completions endpoint.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".into()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}

fn default_temperature() -> f64 {
    0.0
}

const fn default_max_tokens() -> usize {
    256
}

const fn default_timeout_secs() -> u64 {
    60
}
