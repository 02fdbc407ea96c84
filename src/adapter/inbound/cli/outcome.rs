//! Command outcomes and their exit codes.

use crate::domain::view::ViewState;

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Labels resolved (or a non-classifying command succeeded).
    Success,
    /// The provider replied with something other than a JSON object.
    Degraded,
    /// The provider could not be reached; labels fell back to "Unknown".
    Unavailable,
    /// Input was rejected before anything was sent.
    Rejected,
}

impl CommandOutcome {
    /// Outcome for a view state after a submit.
    #[must_use]
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Success {
                provider_error: Some(_),
                ..
            } => Self::Unavailable,
            ViewState::Success { .. } => Self::Success,
            ViewState::Degraded { .. } => Self::Degraded,
            ViewState::Idle | ViewState::Pending { .. } => Self::Rejected,
        }
    }

    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Degraded | Self::Unavailable | Self::Rejected => 1,
        }
    }
}
