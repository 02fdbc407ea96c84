//! Classification request type.

use serde::Serialize;

use super::error::DomainError;

/// A single purchase-order classification request.
///
/// Constructed only through [`ClassificationRequest::try_new`], so a value of
/// this type always carries a non-blank description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRequest {
    description: String,
    supplier: Option<String>,
}

impl ClassificationRequest {
    /// Validate and build a request.
    ///
    /// A blank supplier is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyInput`] if the description is empty or
    /// whitespace-only.
    pub fn try_new(
        description: impl Into<String>,
        supplier: Option<String>,
    ) -> Result<Self, DomainError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let supplier = supplier.filter(|s| !s.trim().is_empty());

        Ok(Self {
            description,
            supplier,
        })
    }

    /// The PO description, exactly as entered.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The supplier name, if one was given.
    #[must_use]
    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }
}
