use shared::{error::SubmitError, protocol::ContactPayload};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    SelectInterest,
    EnterDetails,
    Submitted,
    /// The collaborator refused the payload. Details stay editable for a retry.
    SubmitFailed(SubmitError),
}

impl FormStep {
    /// Wizard step as shown to the user; a failed submit stays on step 2.
    pub fn number(&self) -> u8 {
        match self {
            Self::SelectInterest => 1,
            Self::EnterDetails | Self::SubmitFailed(_) => 2,
            Self::Submitted => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SelectInterest => "selecting interest",
            Self::EnterDetails => "entering details",
            Self::Submitted => "submitted",
            Self::SubmitFailed(_) => "recovering from a failed submit",
        }
    }

    pub(crate) fn accepts_details(&self) -> bool {
        matches!(self, Self::EnterDetails | Self::SubmitFailed(_))
    }
}

/// State of one contact form instance, created when the page mounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub(crate) step: FormStep,
    pub(crate) answers: ContactPayload,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> &FormStep {
        &self.step
    }

    pub fn answers(&self) -> &ContactPayload {
        &self.answers
    }

    /// Owned copy of the answers, as handed to the submission collaborator.
    pub fn payload(&self) -> ContactPayload {
        self.answers.clone()
    }

    pub fn is_submitted(&self) -> bool {
        self.step == FormStep::Submitted
    }

    pub fn submit_error(&self) -> Option<&SubmitError> {
        match &self.step {
            FormStep::SubmitFailed(err) => Some(err),
            _ => None,
        }
    }
}
