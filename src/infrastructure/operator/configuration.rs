//! Configuration operator implementation.

use crate::infrastructure::config::llm::LlmProvider;
use crate::port::inbound::operator::configuration::{
    ConfigLogging, ConfigProvider, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn config_view(&self) -> ConfigView {
        let llm = &self.config.llm;
        let (temperature, max_tokens, base_url) = match llm.provider {
            LlmProvider::Anthropic => (
                llm.anthropic.temperature,
                llm.anthropic.max_tokens,
                llm.anthropic.base_url.clone(),
            ),
            LlmProvider::OpenAi => (
                llm.openai.temperature,
                llm.openai.max_tokens,
                llm.openai.base_url.clone(),
            ),
        };

        ConfigView {
            source: self.source.clone(),
            source_found: self.source_found,
            logging: ConfigLogging {
                level: self.config.logging.level.clone(),
                format: self.config.logging.format.to_string(),
            },
            provider: ConfigProvider {
                name: llm.provider.to_string(),
                model: llm.active_model().to_string(),
                temperature,
                max_tokens,
                timeout_secs: llm.timeout_secs,
                base_url,
                api_key_env: llm.provider.api_key_env().to_string(),
                api_key_present: self.config.api_key_present(),
            },
        }
    }
}
