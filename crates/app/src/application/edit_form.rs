//! Conference Edit Form - single-step replacement of an existing conference
//!
//! The form owns a deep copy of the loaded conference, so edits never touch the
//! caller's value. Submitting sends the whole reconstructed object; a failure
//! leaves the form open with every edit intact.

use std::sync::Arc;

use confdesk_domain::{
    Attendance, BasicInfoField, Conference, Currency, DynamicList, PaymentPlan, SpeakerPicker,
};
use confdesk_ports::{Notification, NotificationPort};

use crate::application::services::ConferenceService;
use crate::application::wizard::SubmitOutcome;
use crate::application::ServiceError;

const CONFERENCE_UPDATED_MESSAGE: &str = "Conference updated successfully";

/// Raises the submitting flag until dropped, whether or not the request finished.
struct Submitting<'a>(&'a mut bool);

impl<'a> Submitting<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub struct ConferenceEditForm {
    service: ConferenceService,
    notifier: Arc<dyn NotificationPort>,
    original: Conference,
    /// `original` as the editors normalize it; the dirty check compares to this.
    baseline: Conference,
    working: Conference,
    subthemes: DynamicList,
    workshops: DynamicList,
    important_dates: DynamicList,
    speakers: SpeakerPicker,
    submitting: bool,
}

impl ConferenceEditForm {
    pub fn load(
        service: ConferenceService,
        notifier: Arc<dyn NotificationPort>,
        conference: &Conference,
    ) -> Self {
        let working = conference.clone();
        let mut form = Self {
            service,
            notifier,
            subthemes: DynamicList::from_items(working.subthemes.clone()),
            workshops: DynamicList::from_items(working.workshops.clone()),
            important_dates: DynamicList::from_items(working.important_dates.clone()),
            speakers: SpeakerPicker::from_attachments(working.speakers.iter().copied()),
            original: conference.clone(),
            baseline: conference.clone(),
            working,
            submitting: false,
        };
        form.baseline = form.to_conference();
        form
    }

    /// The conference as it was loaded.
    pub fn original(&self) -> &Conference {
        &self.original
    }

    pub fn is_loading(&self) -> bool {
        self.submitting
    }

    pub fn is_dirty(&self) -> bool {
        self.to_conference() != self.baseline
    }

    pub fn field(&self, field: BasicInfoField) -> &str {
        match field {
            BasicInfoField::Title => &self.working.title,
            BasicInfoField::Theme => &self.working.theme,
            BasicInfoField::Venue => &self.working.venue,
            BasicInfoField::Start => &self.working.start,
            BasicInfoField::End => &self.working.end,
        }
    }

    pub fn set_field(&mut self, field: BasicInfoField, value: impl Into<String>) {
        let slot = match field {
            BasicInfoField::Title => &mut self.working.title,
            BasicInfoField::Theme => &mut self.working.theme,
            BasicInfoField::Venue => &mut self.working.venue,
            BasicInfoField::Start => &mut self.working.start,
            BasicInfoField::End => &mut self.working.end,
        };
        *slot = value.into();
    }

    pub fn subthemes_mut(&mut self) -> &mut DynamicList {
        &mut self.subthemes
    }

    pub fn workshops_mut(&mut self) -> &mut DynamicList {
        &mut self.workshops
    }

    pub fn important_dates_mut(&mut self) -> &mut DynamicList {
        &mut self.important_dates
    }

    pub fn speakers(&self) -> &SpeakerPicker {
        &self.speakers
    }

    pub fn speakers_mut(&mut self) -> &mut SpeakerPicker {
        &mut self.speakers
    }

    pub fn plan(&self, name: &str) -> Option<&PaymentPlan> {
        self.working.payments.get(name)
    }

    pub fn plan_names(&self) -> impl Iterator<Item = &str> {
        self.working.payments.keys().map(String::as_str)
    }

    /// Plans the server did not send are created on first edit.
    fn plan_mut(&mut self, name: &str) -> &mut PaymentPlan {
        self.working.payments.entry(name.to_string()).or_default()
    }

    pub fn set_plan_amount(
        &mut self,
        plan: &str,
        attendance: Attendance,
        currency: Currency,
        value: impl Into<String>,
    ) {
        self.plan_mut(plan).amounts_mut(attendance).set(currency, value);
    }

    pub fn add_package_item(&mut self, plan: &str) {
        self.plan_mut(plan).add_package_item();
    }

    pub fn remove_package_item(&mut self, plan: &str, index: usize) -> Option<String> {
        self.working.payments.get_mut(plan)?.remove_package_item(index)
    }

    pub fn update_package_item(
        &mut self,
        plan: &str,
        index: usize,
        value: impl Into<String>,
    ) -> bool {
        match self.working.payments.get_mut(plan) {
            Some(p) => p.update_package_item(index, value),
            None => false,
        }
    }

    /// The full replacement object, as it would be submitted.
    pub fn to_conference(&self) -> Conference {
        let mut conference = self.working.clone();
        conference.subthemes = self.subthemes.items().to_vec();
        conference.workshops = self.workshops.items().to_vec();
        conference.important_dates = self.important_dates.items().to_vec();
        conference.speakers = self.speakers.attachments().to_vec();
        conference
    }

    /// Submit the edited conference.
    ///
    /// A blank title, theme, venue or date blocks the request. On success the
    /// submitted value becomes the new `original`.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Ignored;
        }

        let conference = self.to_conference();
        if let Some(field) = conference.basic_info().first_missing_required() {
            let error = ServiceError::Validation(format!("{} is required", field));
            self.notifier.notify(error.to_notification());
            return SubmitOutcome::Invalid;
        }

        let result = {
            let _submitting = Submitting::start(&mut self.submitting);
            self.service.edit_conference(&conference).await
        };

        match result {
            Ok(message) => {
                tracing::debug!(conference_id = %conference.id, "Conference updated");
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| CONFERENCE_UPDATED_MESSAGE.to_string());
                self.notifier.notify(Notification::success(message));
                self.baseline = conference.clone();
                self.original = conference;
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(conference_id = %conference.id, error = %e, "Conference update failed");
                self.notifier.notify(e.to_notification());
                SubmitOutcome::Failed
            }
        }
    }
}
