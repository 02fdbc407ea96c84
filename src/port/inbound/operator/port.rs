//! Unified operator capability surface for inbound adapters.

use super::classification::ClassificationOperator;
use super::configuration::ConfigurationOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ClassificationOperator + ConfigurationOperator {}

impl<T> OperatorPort for T where T: ClassificationOperator + ConfigurationOperator {}
