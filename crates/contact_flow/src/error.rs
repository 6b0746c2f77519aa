use std::fmt;

use shared::{
    error::{ErrorCode, ErrorReport},
    protocol::ContactField,
};
use thiserror::Error;

use crate::state::FormStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    SelectInterest,
    UpdateField,
    Submit,
    Back,
}

impl fmt::Display for FlowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelectInterest => "select_interest",
            Self::UpdateField => "update_field",
            Self::Submit => "submit",
            Self::Back => "back",
        })
    }
}

/// A transition the controller refused. The caller's state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("cannot {action} while {step}")]
    InvalidTransition { action: FlowAction, step: &'static str },
    #[error("interest must not be empty")]
    EmptyInterest,
    #[error("missing required fields: {}", join_fields(.missing))]
    Incomplete { missing: Vec<ContactField> },
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl FlowError {
    pub(crate) fn invalid(action: FlowAction, step: &FormStep) -> Self {
        Self::InvalidTransition {
            action,
            step: step.label(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            Self::EmptyInterest | Self::Incomplete { .. } | Self::InvalidEmail(_) => {
                ErrorCode::Validation
            }
        }
    }
}

impl From<&FlowError> for ErrorReport {
    fn from(value: &FlowError) -> Self {
        ErrorReport::new(value.code(), value.to_string())
    }
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
