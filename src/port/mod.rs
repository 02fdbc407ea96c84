//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   CLI (inbound adapter) ──▶ OperatorPort (inbound port)
//!          │
//!          ▼
//!   ClassificationSession ──▶ Classifier (port) ──▶ LlmClassifier ──▶ Llm (port)
//!                                                                      │
//!                                                          Anthropic / OpenAI adapters
//! ```

pub mod inbound;
pub mod outbound;
