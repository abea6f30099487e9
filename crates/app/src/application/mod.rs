//! Application layer - Use cases and orchestration

pub mod dto;
pub mod edit_form;
pub mod error;
pub mod services;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

// Re-export common types
pub use edit_form::ConferenceEditForm;
pub use error::{ParseEnvelope, ServiceError, GENERIC_ERROR_MESSAGE};
pub use services::ConferenceService;
pub use wizard::{ConferenceWizard, SubmitOutcome, WizardState, WizardStep};
