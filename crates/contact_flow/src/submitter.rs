use std::cell::RefCell;

use shared::{error::SubmitError, protocol::ContactPayload};

/// Delivery of a finished contact form (email, ticketing, ...).
///
/// The payload is passed by value; implementations never see the form state.
pub trait ContactSubmitter {
    fn submit(&self, payload: ContactPayload) -> Result<(), SubmitError>;
}

impl<F> ContactSubmitter for F
where
    F: Fn(ContactPayload) -> Result<(), SubmitError>,
{
    fn submit(&self, payload: ContactPayload) -> Result<(), SubmitError> {
        self(payload)
    }
}

/// In-memory submitter that records every accepted payload.
#[derive(Debug, Default)]
pub struct Outbox {
    sent: RefCell<Vec<ContactPayload>>,
    failure: Option<SubmitError>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// An outbox that refuses every payload with `err`.
    pub fn failing(err: SubmitError) -> Self {
        Self {
            sent: RefCell::default(),
            failure: Some(err),
        }
    }

    pub fn sent(&self) -> Vec<ContactPayload> {
        self.sent.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.borrow().is_empty()
    }
}

impl ContactSubmitter for Outbox {
    fn submit(&self, payload: ContactPayload) -> Result<(), SubmitError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.sent.borrow_mut().push(payload);
        Ok(())
    }
}
