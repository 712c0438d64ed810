//! Client-side form state machines.

pub mod service_form;

pub use service_form::{FormPhase, SAVED_MESSAGE, ServiceForm, SubmitError};
