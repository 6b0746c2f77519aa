use shared::protocol::{ContactField, ContactPayload};

use crate::error::FlowError;

/// Preconditions checked by `submit`. The default enforces nothing, matching
/// the contact page, which sends whatever was typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitPolicy {
    pub require_complete: bool,
}

impl SubmitPolicy {
    pub fn strict() -> Self {
        Self {
            require_complete: true,
        }
    }

    pub fn check(&self, answers: &ContactPayload) -> Result<(), FlowError> {
        if !self.require_complete {
            return Ok(());
        }

        let missing: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|field| answers.field(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(FlowError::Incomplete { missing });
        }

        if !looks_like_email(answers.email.trim()) {
            return Err(FlowError::InvalidEmail(answers.email.clone()));
        }
        Ok(())
    }
}

/// `local@domain.tld` shape only; no attempt at full address grammar.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
