use serde::{Deserialize, Serialize};
use std::fmt;

/// Which flow a call to the controller runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPurpose {
    /// Record the current enrollment as the trusted baseline
    Activation,
    /// Re-challenge and confirm the enrollment is unchanged
    Verification,
}

/// Terminal outcome of a flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum AuthResult {
    Success,
    Failure(String),
}

impl AuthResult {
    pub(crate) fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Failure reason, `None` on success.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure(reason) => Some(reason.as_str()),
        }
    }
}

/// Pipeline position of a running flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowState {
    Idle,
    Probing,
    Evaluating,
    Comparing,
    Recording,
    Done,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
