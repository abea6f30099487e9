//! Two-step conference creation wizard

mod controller;
mod state;

pub use controller::ConferenceWizard;
pub use state::{WizardState, WizardStep, WizardTransitionError};

/// What a submit handler did. Failures have already been surfaced as
/// notifications by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request succeeded and the dialog moved on.
    Succeeded,
    /// The request failed; entered data is intact.
    Failed,
    /// Blocked by the required-field check; no request was made.
    Invalid,
    /// Not in a state that accepts this action (e.g. already in flight).
    Ignored,
}
