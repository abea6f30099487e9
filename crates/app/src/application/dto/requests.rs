//! Request payloads for conference creation and editing
//!
//! The creation endpoints take multipart forms where files are repeated parts
//! and every structured value (lists, packages, speakers) is a JSON string in a
//! single text field. The server depends on this exact layout.

use serde::Serialize;

use confdesk_domain::{
    BasicInfoField, ConferenceId, CorrelationToken, MediaKind, TierName, WizardDraft,
};
use confdesk_ports::{ApiError, FormPayload};

use crate::application::error::ServiceError;

pub const SPEAKERS_LIST_PATH: &str = "/admin/speakers_list";
pub const CREATE_CONFERENCE_BASIC_INFO_PATH: &str = "/admin/create_conference/1";
pub const CREATE_CONFERENCE_MEDIA_PATH: &str = "/admin/create_conference/2";

pub fn edit_conference_path(id: ConferenceId) -> String {
    format!("/admin/edit_conference/{}", id)
}

/// Tiers in the order the media endpoint receives them.
const TIER_FIELD_ORDER: [TierName; 3] = [TierName::Basic, TierName::Premium, TierName::Standard];

fn json_field<T: Serialize + ?Sized>(value: &T) -> Result<String, ServiceError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializeError(e.to_string()).into())
}

fn media_field_name(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Gallery => "gallery[]",
        MediaKind::Sponsors => "sponsors[]",
        MediaKind::Videos => "videos[]",
    }
}

/// Step one of conference creation: scalar fields, the three free-text lists, the flyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicInfoSubmission {
    form: FormPayload,
}

impl BasicInfoSubmission {
    pub fn from_draft(draft: &WizardDraft) -> Result<Self, ServiceError> {
        let mut form = FormPayload::new();
        for field in BasicInfoField::all() {
            form.push_text(field.as_str(), draft.basic.get(*field));
        }
        form.push_text("subthemes_input", json_field(draft.subthemes.items())?);
        form.push_text("workshops_input", json_field(draft.workshops.items())?);
        form.push_text("important_date", json_field(draft.important_dates.items())?);
        if let Some(flyer) = &draft.flyer {
            form.push_file("flyer", flyer.clone());
        }
        Ok(Self { form })
    }

    pub fn form(&self) -> &FormPayload {
        &self.form
    }
}

/// Step two of conference creation: media, pricing and speakers, tagged with
/// the token issued for step one.
///
/// Constructing one requires a [`CorrelationToken`], so a step-two request
/// cannot exist before step one has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAndPricingSubmission {
    token: CorrelationToken,
    form: FormPayload,
}

impl MediaAndPricingSubmission {
    pub fn new(token: &CorrelationToken, draft: &WizardDraft) -> Result<Self, ServiceError> {
        let mut form = FormPayload::new().text("token", token.as_str());

        for kind in MediaKind::all() {
            for file in draft.media(*kind) {
                form.push_file(media_field_name(*kind), file.clone());
            }
        }

        for tier_name in TIER_FIELD_ORDER {
            let tier = draft.pricing.tier(tier_name);
            form.push_text(format!("{}_naira", tier_name), tier.amount_naira.as_str());
            form.push_text(format!("{}_usd", tier_name), tier.amount_usd.as_str());
            form.push_text(format!("{}_package", tier_name), json_field(&tier.inclusions)?);
        }

        form.push_text("speakers", json_field(draft.speakers.attachments())?);

        Ok(Self {
            token: token.clone(),
            form,
        })
    }

    pub fn token(&self) -> &CorrelationToken {
        &self.token
    }

    pub fn form(&self) -> &FormPayload {
        &self.form
    }
}
