//! Domain validation errors.
//!
//! Returned when a classification request violates its invariants before
//! anything is sent to the provider.
//!
//! ```
//! use po_classifier::domain::error::DomainError;
//! use po_classifier::domain::request::ClassificationRequest;
//!
//! let result = ClassificationRequest::try_new("   ", None);
//! assert!(matches!(result, Err(DomainError::EmptyInput)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The PO description was empty or whitespace-only at submit time.
    #[error("Please enter a PO Description")]
    EmptyInput,
}
