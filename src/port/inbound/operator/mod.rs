//! Operator capability surface consumed by the CLI.

pub mod classification;
pub mod configuration;
pub mod port;
