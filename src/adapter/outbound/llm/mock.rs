//! Mock LLM for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Returns a fixed reply (or a connection error) and records every prompt.
pub struct MockLlm {
    reply: std::result::Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            reply: Ok(response.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(Error::Connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_llm_returns_response() {
        let llm = MockLlm::new(r#"{"L1": "IT"}"#);
        let result = llm.complete("test").await.unwrap();
        assert_eq!(result, r#"{"L1": "IT"}"#);
        assert_eq!(llm.prompts(), vec!["test".to_string()]);
    }

    #[tokio::test]
    async fn failing_mock_returns_connection_error() {
        let llm = MockLlm::failing("refused");
        let err = llm.complete("test").await.unwrap_err();
        assert!(matches!(err, Error::Connection(ref m) if m == "refused"));
    }
}
