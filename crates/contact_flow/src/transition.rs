//! Pure transitions: each takes the current state by reference and returns the
//! next one, so a rejected transition never touches the caller's state.

use shared::protocol::ContactField;
use tracing::{debug, warn};

use crate::{
    error::{FlowAction, FlowError},
    state::{FormState, FormStep},
    submitter::ContactSubmitter,
    validation::SubmitPolicy,
};

impl FormState {
    /// Step 1 → step 2 with the chosen interest recorded.
    pub fn select_interest(&self, choice: impl Into<String>) -> Result<FormState, FlowError> {
        if self.step != FormStep::SelectInterest {
            return Err(self.reject(FlowAction::SelectInterest));
        }
        let choice = choice.into();
        if choice.trim().is_empty() {
            return Err(FlowError::EmptyInterest);
        }

        let mut next = self.clone();
        next.answers.interest = choice;
        next.step = FormStep::EnterDetails;
        debug!(interest = %next.answers.interest, step = next.step.number(), "interest selected");
        Ok(next)
    }

    /// Sets one detail field. Last write wins; values are not validated here.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) -> Result<FormState, FlowError> {
        if !self.step.accepts_details() {
            return Err(self.reject(FlowAction::UpdateField));
        }

        let mut next = self.clone();
        *next.answers.field_mut(field) = value.into();
        // Editing after a failed submit discards the stale failure.
        next.step = FormStep::EnterDetails;
        Ok(next)
    }

    /// Step 2 → step 1. Answers are kept so re-selecting does not lose details.
    pub fn back(&self) -> Result<FormState, FlowError> {
        if !self.step.accepts_details() {
            return Err(self.reject(FlowAction::Back));
        }

        let mut next = self.clone();
        next.step = FormStep::SelectInterest;
        debug!("returned to interest selection");
        Ok(next)
    }

    /// Hands a copy of the answers to `submitter`.
    ///
    /// Guard failures (wrong step, policy violations) come back as `Err` with the
    /// state untouched. A collaborator failure is not a guard failure: the
    /// returned state is `SubmitFailed` carrying the error, and a later `submit`
    /// may retry.
    pub fn submit(
        &self,
        submitter: &dyn ContactSubmitter,
        policy: SubmitPolicy,
    ) -> Result<FormState, FlowError> {
        if !self.step.accepts_details() {
            return Err(self.reject(FlowAction::Submit));
        }
        policy.check(&self.answers)?;

        let mut next = self.clone();
        match submitter.submit(self.payload()) {
            Ok(()) => {
                debug!(interest = %self.answers.interest, "contact payload submitted");
                next.step = FormStep::Submitted;
            }
            Err(err) => {
                warn!(error = %err, retryable = err.is_retryable(), "contact submission failed");
                next.step = FormStep::SubmitFailed(err);
            }
        }
        Ok(next)
    }

    fn reject(&self, action: FlowAction) -> FlowError {
        warn!(%action, step = self.step.label(), "rejected contact form transition");
        FlowError::invalid(action, &self.step)
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
