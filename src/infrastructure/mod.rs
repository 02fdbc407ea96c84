//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! classification logic: configuration loading, logging setup, and wiring
//! of concrete adapters behind the operator port.

pub mod bootstrap;
pub mod config;
pub mod operator;
