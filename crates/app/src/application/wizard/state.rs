//! Conference creation wizard state machine
//!
//! ```text
//! EditingBasicInfo --begin--> SubmittingBasicInfo --complete(token)--> EditingMediaAndPricing
//!        ^                            |                                  |        |
//!        +----------fail--------------+                                  |      begin
//!        +-------------------------back (token kept)---------------------+        v
//!                                       EditingMediaAndPricing <--fail-- SubmittingMediaAndPricing
//!                                                                                 |
//!                                                                          complete --> Done
//! ```
//!
//! The token lives inside the states that need it. Step two can only be started
//! from `EditingMediaAndPricing`, which always holds one.

use std::fmt;

use thiserror::Error;

use confdesk_domain::CorrelationToken;

/// The step the dialog should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    BasicInfo,
    MediaAndPricing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Step one form. `token` is kept when the user came back from step two.
    EditingBasicInfo { token: Option<CorrelationToken> },
    SubmittingBasicInfo { previous_token: Option<CorrelationToken> },
    EditingMediaAndPricing { token: CorrelationToken },
    SubmittingMediaAndPricing { token: CorrelationToken },
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot {action} while {state}")]
pub struct WizardTransitionError {
    pub state: &'static str,
    pub action: &'static str,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        WizardState::EditingBasicInfo { token: None }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WizardState::EditingBasicInfo { .. } => "editing basic info",
            WizardState::SubmittingBasicInfo { .. } => "submitting basic info",
            WizardState::EditingMediaAndPricing { .. } => "editing media and pricing",
            WizardState::SubmittingMediaAndPricing { .. } => "submitting media and pricing",
            WizardState::Done => "done",
        }
    }

    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::EditingBasicInfo { .. } | WizardState::SubmittingBasicInfo { .. } => {
                WizardStep::BasicInfo
            }
            WizardState::EditingMediaAndPricing { .. }
            | WizardState::SubmittingMediaAndPricing { .. } => WizardStep::MediaAndPricing,
            WizardState::Done => WizardStep::Done,
        }
    }

    /// True while a request is in flight; the submit buttons should be disabled.
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            WizardState::SubmittingBasicInfo { .. } | WizardState::SubmittingMediaAndPricing { .. }
        )
    }

    pub fn correlation_token(&self) -> Option<&CorrelationToken> {
        match self {
            WizardState::EditingBasicInfo { token } => token.as_ref(),
            WizardState::SubmittingBasicInfo { previous_token } => previous_token.as_ref(),
            WizardState::EditingMediaAndPricing { token }
            | WizardState::SubmittingMediaAndPricing { token } => Some(token),
            WizardState::Done => None,
        }
    }

    fn reject(&self, action: &'static str) -> WizardTransitionError {
        WizardTransitionError {
            state: self.name(),
            action,
        }
    }

    /// "Next Step" pressed.
    pub fn begin_basic_info(&mut self) -> Result<(), WizardTransitionError> {
        match self {
            WizardState::EditingBasicInfo { token } => {
                let previous_token = token.take();
                *self = WizardState::SubmittingBasicInfo { previous_token };
                Ok(())
            }
            _ => Err(self.reject("submit basic info")),
        }
    }

    /// Step one accepted; a fresh token replaces any earlier one.
    pub fn complete_basic_info(
        &mut self,
        token: CorrelationToken,
    ) -> Result<(), WizardTransitionError> {
        match self {
            WizardState::SubmittingBasicInfo { .. } => {
                *self = WizardState::EditingMediaAndPricing { token };
                Ok(())
            }
            _ => Err(self.reject("complete basic info")),
        }
    }

    pub fn fail_basic_info(&mut self) -> Result<(), WizardTransitionError> {
        match self {
            WizardState::SubmittingBasicInfo { previous_token } => {
                let token = previous_token.take();
                *self = WizardState::EditingBasicInfo { token };
                Ok(())
            }
            _ => Err(self.reject("fail basic info")),
        }
    }

    /// "Create Conference" pressed. Returns the token the request must carry.
    pub fn begin_media_and_pricing(&mut self) -> Result<CorrelationToken, WizardTransitionError> {
        match self {
            WizardState::EditingMediaAndPricing { token } => {
                let token = token.clone();
                *self = WizardState::SubmittingMediaAndPricing {
                    token: token.clone(),
                };
                Ok(token)
            }
            _ => Err(self.reject("submit media and pricing")),
        }
    }

    pub fn complete_media_and_pricing(&mut self) -> Result<(), WizardTransitionError> {
        match self {
            WizardState::SubmittingMediaAndPricing { .. } => {
                *self = WizardState::Done;
                Ok(())
            }
            _ => Err(self.reject("complete media and pricing")),
        }
    }

    /// Back to step two editing; the token is kept for the retry.
    pub fn fail_media_and_pricing(&mut self) -> Result<(), WizardTransitionError> {
        match self {
            WizardState::SubmittingMediaAndPricing { token } => {
                let token = token.clone();
                *self = WizardState::EditingMediaAndPricing { token };
                Ok(())
            }
            _ => Err(self.reject("fail media and pricing")),
        }
    }

    /// An in-flight request ended without a result (its future was dropped).
    /// Returns to the matching editing state with the token it held.
    pub fn abandon(&mut self) -> bool {
        match self {
            WizardState::SubmittingBasicInfo { previous_token } => {
                let token = previous_token.take();
                *self = WizardState::EditingBasicInfo { token };
                true
            }
            WizardState::SubmittingMediaAndPricing { token } => {
                let token = token.clone();
                *self = WizardState::EditingMediaAndPricing { token };
                true
            }
            _ => false,
        }
    }

    /// "Back" from step two. Nothing is discarded.
    pub fn back(&mut self) -> Result<(), WizardTransitionError> {
        match self {
            WizardState::EditingMediaAndPricing { token } => {
                let token = Some(token.clone());
                *self = WizardState::EditingBasicInfo { token };
                Ok(())
            }
            _ => Err(self.reject("go back")),
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
