use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidTransition,
    Validation,
    Unavailable,
    Rejected,
}

/// Serializable error body, used when reporting failures as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Failure reported by the contact submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl SubmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unavailable(_) => ErrorCode::Unavailable,
            Self::Rejected(_) => ErrorCode::Rejected,
        }
    }

    /// Whether resubmitting the same payload later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<&SubmitError> for ErrorReport {
    fn from(value: &SubmitError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
