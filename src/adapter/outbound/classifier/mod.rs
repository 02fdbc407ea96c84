//! Classification gateway adapters.

pub mod llm;
