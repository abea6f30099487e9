//! Conference Wizard - drives the two-step creation dialog
//!
//! Holds the draft, the state machine and the speaker roster for one dialog
//! session. Every handler catches its own failures, turns them into a
//! notification, and leaves entered data untouched.

use std::sync::Arc;

use confdesk_domain::{AvailableSpeaker, CorrelationToken, RosterOption, WizardDraft};
use confdesk_ports::{Notification, NotificationPort};

use super::{SubmitOutcome, WizardState, WizardStep};
use crate::application::dto::{BasicInfoSubmission, MediaAndPricingSubmission};
use crate::application::services::ConferenceService;
use crate::application::ServiceError;

const CONFERENCE_CREATED_MESSAGE: &str = "Conference created successfully";

/// Holds the wizard in its submitting state for the length of one request.
/// Dropped unsettled, it puts the wizard back to editing.
struct InFlight<'a> {
    state: &'a mut WizardState,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a mut WizardState) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled && self.state.abandon() {
            tracing::debug!(state = %self.state, "Submission dropped before completion");
        }
    }
}

pub struct ConferenceWizard {
    service: ConferenceService,
    notifier: Arc<dyn NotificationPort>,
    state: WizardState,
    draft: WizardDraft,
    roster: Vec<AvailableSpeaker>,
}

impl ConferenceWizard {
    pub fn new(service: ConferenceService, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            service,
            notifier,
            state: WizardState::new(),
            draft: WizardDraft::new(),
            roster: Vec::new(),
        }
    }

    /// Start a dialog session: empty draft, step one, fresh roster.
    ///
    /// The roster is fetched here and nowhere else. A failed fetch is reported
    /// and leaves the roster empty; the wizard stays usable.
    pub async fn open(&mut self) {
        self.reset();
        match self.service.list_speakers().await {
            Ok(roster) => {
                tracing::debug!(speakers = roster.len(), "Loaded speaker roster");
                self.roster = roster;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load speaker roster");
                self.roster.clear();
                self.notifier.notify(e.to_notification());
            }
        }
    }

    /// Back to an empty step one. The roster is kept.
    pub fn reset(&mut self) {
        self.state = WizardState::new();
        self.draft = WizardDraft::new();
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn correlation_token(&self) -> Option<&CorrelationToken> {
        self.state.correlation_token()
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut WizardDraft {
        &mut self.draft
    }

    pub fn roster(&self) -> &[AvailableSpeaker] {
        &self.roster
    }

    /// Roster entries for the picker, attached speakers disabled.
    pub fn roster_options(&self) -> Vec<RosterOption<'_>> {
        self.draft.speakers.roster_options(&self.roster)
    }

    fn report(&self, error: &ServiceError) {
        self.notifier.notify(error.to_notification());
    }

    /// "Next Step": submit step one and move to step two on success.
    pub async fn next_step(&mut self) -> SubmitOutcome {
        if !matches!(self.state, WizardState::EditingBasicInfo { .. }) {
            tracing::debug!(state = %self.state, "Ignoring next step");
            return SubmitOutcome::Ignored;
        }

        if let Some(field) = self.draft.basic.first_missing_required() {
            self.report(&ServiceError::Validation(format!("{} is required", field)));
            return SubmitOutcome::Invalid;
        }

        let submission = match BasicInfoSubmission::from_draft(&self.draft) {
            Ok(submission) => submission,
            Err(e) => {
                self.report(&e);
                return SubmitOutcome::Failed;
            }
        };

        if let Err(e) = self.state.begin_basic_info() {
            tracing::debug!(error = %e, "Ignoring next step");
            return SubmitOutcome::Ignored;
        }
        tracing::debug!(state = %self.state, "Wizard transition");

        let in_flight = InFlight::new(&mut self.state);
        let result = self.service.submit_basic_info(&submission).await;
        in_flight.settle();

        let outcome = match result {
            Ok(token) => self.state.complete_basic_info(token).map(|_| SubmitOutcome::Succeeded),
            Err(e) => {
                tracing::warn!(error = %e, "Conference basic info submission failed");
                self.report(&e);
                self.state.fail_basic_info().map(|_| SubmitOutcome::Failed)
            }
        };
        tracing::debug!(state = %self.state, "Wizard transition");

        outcome.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Wizard left in unexpected state");
            SubmitOutcome::Failed
        })
    }

    /// "Back" from step two. Keeps the token and every entered value.
    pub fn back(&mut self) -> bool {
        match self.state.back() {
            Ok(()) => {
                tracing::debug!(state = %self.state, "Wizard transition");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring back");
                false
            }
        }
    }

    /// "Create Conference": submit step two with the step-one token.
    ///
    /// On success the draft is discarded and the wizard is done. On failure the
    /// wizard stays on step two with the token and all values kept for a retry.
    pub async fn create_conference(&mut self) -> SubmitOutcome {
        let token = match &self.state {
            WizardState::EditingMediaAndPricing { token } => token.clone(),
            _ => {
                tracing::debug!(state = %self.state, "Ignoring create conference");
                return SubmitOutcome::Ignored;
            }
        };

        let submission = match MediaAndPricingSubmission::new(&token, &self.draft) {
            Ok(submission) => submission,
            Err(e) => {
                self.report(&e);
                return SubmitOutcome::Failed;
            }
        };

        if let Err(e) = self.state.begin_media_and_pricing() {
            tracing::debug!(error = %e, "Ignoring create conference");
            return SubmitOutcome::Ignored;
        }
        tracing::debug!(state = %self.state, "Wizard transition");

        let in_flight = InFlight::new(&mut self.state);
        let result = self.service.submit_media_and_pricing(&submission).await;
        in_flight.settle();

        let outcome = match result {
            Ok(message) => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| CONFERENCE_CREATED_MESSAGE.to_string());
                self.notifier.notify(Notification::success(message));
                self.draft = WizardDraft::new();
                self.state
                    .complete_media_and_pricing()
                    .map(|_| SubmitOutcome::Succeeded)
            }
            Err(e) => {
                tracing::warn!(error = %e, token = %token, "Conference media submission failed");
                self.report(&e);
                self.state
                    .fail_media_and_pricing()
                    .map(|_| SubmitOutcome::Failed)
            }
        };
        tracing::debug!(state = %self.state, "Wizard transition");

        outcome.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Wizard left in unexpected state");
            SubmitOutcome::Failed
        })
    }
}
