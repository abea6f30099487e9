//! Conference Service - admin API calls for the conference dialogs
//!
//! Wraps the four REST calls the wizard and edit form need. Each method issues
//! exactly one request and never retries.

use std::sync::Arc;

use serde::Deserialize;

use confdesk_domain::{AvailableSpeaker, Conference, CorrelationToken};
use confdesk_ports::{ApiError, RawApiPort};

use crate::application::dto::{
    edit_conference_path, BasicInfoSubmission, MediaAndPricingSubmission,
    CREATE_CONFERENCE_BASIC_INFO_PATH, CREATE_CONFERENCE_MEDIA_PATH, SPEAKERS_LIST_PATH,
};
use crate::application::{ParseEnvelope, ServiceError};

#[derive(Deserialize)]
struct TokenData {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Clone)]
pub struct ConferenceService {
    api: Arc<dyn RawApiPort>,
}

impl ConferenceService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the speaker roster
    pub async fn list_speakers(&self) -> Result<Vec<AvailableSpeaker>, ServiceError> {
        let body = self.api.get_json(SPEAKERS_LIST_PATH).await?;
        body.parse_data()
    }

    /// Submit step one and return the server's correlation token.
    ///
    /// A success envelope without a non-blank `data.token` is a failure.
    pub async fn submit_basic_info(
        &self,
        submission: &BasicInfoSubmission,
    ) -> Result<CorrelationToken, ServiceError> {
        let body = self
            .api
            .post_multipart(CREATE_CONFERENCE_BASIC_INFO_PATH, submission.form())
            .await?;
        let data: TokenData = body.parse_data()?;
        data.token
            .and_then(|token| CorrelationToken::new(token).ok())
            .ok_or(ServiceError::EmptyResponse)
    }

    /// Submit step two. Returns the envelope message on success.
    pub async fn submit_media_and_pricing(
        &self,
        submission: &MediaAndPricingSubmission,
    ) -> Result<Option<String>, ServiceError> {
        tracing::debug!(
            token = %submission.token(),
            parts = submission.form().len(),
            "Submitting conference media and pricing"
        );
        let body = self
            .api
            .post_multipart(CREATE_CONFERENCE_MEDIA_PATH, submission.form())
            .await?;
        body.parse_ack()
    }

    /// Replace an existing conference with `conference`.
    pub async fn edit_conference(
        &self,
        conference: &Conference,
    ) -> Result<Option<String>, ServiceError> {
        let payload = serde_json::to_value(conference)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let body = self
            .api
            .post_json(&edit_conference_path(conference.id), &payload)
            .await?;
        body.parse_ack()
    }
}
