//! Contact page wizard: pick an interest, fill in details, hand off the payload.

pub mod error;
pub mod interests;
pub mod state;
pub mod submitter;
pub mod transition;
pub mod validation;

pub use error::{FlowAction, FlowError};
pub use interests::{interests, Interest};
pub use state::{FormState, FormStep};
pub use submitter::{ContactSubmitter, Outbox};
pub use validation::SubmitPolicy;
