//! Provider-agnostic classification types.
//!
//! Nothing in here performs I/O: requests are validated, raw provider text
//! is interpreted, and the caller's view state is modeled as plain values.

pub mod error;
pub mod label;
pub mod request;
pub mod response;
pub mod view;
