//! Inbound operator accessor for CLI handlers.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::port::inbound::operator::port::OperatorPort;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
///
/// # Errors
///
/// Returns [`Error::OperatorNotInstalled`] when `main` has not called
/// [`install`] yet.
pub fn operator() -> Result<&'static dyn OperatorPort> {
    OPERATOR
        .get()
        .map(AsRef::as_ref)
        .ok_or(Error::OperatorNotInstalled)
}
