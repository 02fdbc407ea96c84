//! Classification use-cases for operator-facing adapters.

use crate::error::Result;
use crate::port::outbound::classifier::Classifier;

/// Hands inbound adapters a ready-to-use classification gateway.
pub trait ClassificationOperator: Send + Sync {
    /// Build the gateway for the configured provider.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the provider's API key is not set.
    fn classifier(&self) -> Result<Box<dyn Classifier>>;
}
