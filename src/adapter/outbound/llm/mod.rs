//! LLM adapter modules.
//!
//! Implementations of the outbound `Llm` port for Anthropic Claude and OpenAI.

pub mod anthropic;
pub mod openai;

#[cfg(test)]
pub mod mock;
