//! Operator implementations for inbound adapters.

pub mod classification;
pub mod configuration;
pub mod entry;
