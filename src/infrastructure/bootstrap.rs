//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::classifier::llm::LlmClassifier;
use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::llm::{LlmConfig, LlmProvider};
use crate::port::outbound::classifier::Classifier;
use crate::port::outbound::llm::Llm;

/// Read an API key from the environment. Blank values count as missing.
fn api_key(provider: LlmProvider) -> Result<String> {
    let field = provider.api_key_env();
    std::env::var(field)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingField { field }.into())
}

/// Build the LLM client for the configured provider.
///
/// # Errors
///
/// Returns a configuration error if the active provider's API key is not set.
pub(crate) fn build_llm_client(config: &LlmConfig) -> Result<Arc<dyn Llm>> {
    let api_key = api_key(config.provider)?;

    let client: Arc<dyn Llm> = match config.provider {
        LlmProvider::Anthropic => {
            let settings = &config.anthropic;
            let client = Anthropic::new(
                api_key,
                &settings.model,
                settings.max_tokens,
                settings.temperature,
            )
            .with_timeout(config.timeout());
            Arc::new(match &settings.base_url {
                Some(url) => client.with_endpoint(url),
                None => client,
            })
        }
        LlmProvider::OpenAi => {
            let settings = &config.openai;
            let client = OpenAi::new(
                api_key,
                &settings.model,
                settings.max_tokens,
                settings.temperature,
            )
            .with_timeout(config.timeout());
            Arc::new(match &settings.base_url {
                Some(url) => client.with_endpoint(url),
                None => client,
            })
        }
    };

    info!(
        provider = client.name(),
        model = config.active_model(),
        timeout_secs = config.timeout_secs,
        "LLM client initialized"
    );
    Ok(client)
}

/// Build the classification gateway over the configured LLM client.
///
/// # Errors
///
/// Returns a configuration error if the active provider's API key is not set.
pub(crate) fn build_classifier(config: &LlmConfig) -> Result<Box<dyn Classifier>> {
    Ok(Box::new(LlmClassifier::new(build_llm_client(config)?)))
}
