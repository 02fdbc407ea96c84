//! Caller view state.
//!
//! ```text
//! Idle ──submit──▶ Pending ──▶ Success
//!                     │
//!                     └──────▶ Degraded
//! ```
//!
//! A terminal state is replaced by a fresh `Pending` on the next submit.

use serde_json::Value;

use super::label::ClassificationResult;
use super::request::ClassificationRequest;
use super::response::{Interpretation, RawResponse};

/// The single piece of transient display state held by a caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; the busy indicator is shown.
    Pending { request: ClassificationRequest },
    /// Labels were resolved.
    Success {
        result: ClassificationResult,
        /// Full parsed response, absent when the provider call failed.
        parsed: Option<Value>,
        /// Set when the provider call failed and labels fell back to "Unknown".
        provider_error: Option<String>,
    },
    /// The provider answered with something other than a JSON object.
    Degraded { raw: RawResponse },
}

impl ViewState {
    /// Terminal state for an interpreted provider response.
    #[must_use]
    pub fn from_interpretation(interpretation: Interpretation) -> Self {
        match interpretation {
            Interpretation::Classified { result, parsed } => Self::Success {
                result,
                parsed: Some(parsed),
                provider_error: None,
            },
            Interpretation::Malformed { raw } => Self::Degraded { raw },
        }
    }

    /// Terminal state for a failed provider call.
    #[must_use]
    pub fn provider_failed(message: impl Into<String>) -> Self {
        Self::Success {
            result: ClassificationResult::unknown(),
            parsed: None,
            provider_error: Some(message.into()),
        }
    }

    /// Short state name for logs and JSON output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending { .. } => "pending",
            Self::Success { .. } => "success",
            Self::Degraded { .. } => "degraded",
        }
    }
}
