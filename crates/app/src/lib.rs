//! Confdesk application layer.
//!
//! Services that speak the admin REST contract, and the controllers that drive
//! the conference creation wizard and the conference edit form.

pub mod application;

pub use application::{
    ConferenceEditForm, ConferenceService, ConferenceWizard, ParseEnvelope, ServiceError,
    SubmitOutcome, WizardState, WizardStep,
};
