//! Inbound ports (driving side): capabilities exposed to inbound adapters.

pub mod operator;
