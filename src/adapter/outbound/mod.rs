//! Outbound adapters (driven side).

pub mod classifier;
pub mod llm;
