//! Application services (use cases).
//!
//! These services drive domain logic and coordinate adapters to implement
//! the application's use cases.

pub mod session;
