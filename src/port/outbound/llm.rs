//! LLM completion port.
//!
//! Defines a generic interface for large language model completion requests,
//! used by the LLM-backed classification gateway.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap specific LLM providers (OpenAI, Anthropic, etc.) and
/// handle authentication and response decoding.
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for API failures,
/// timeouts, or responses that do not match the provider's envelope.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the envelope is invalid.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
