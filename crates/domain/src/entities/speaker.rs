//! Speakers: the server-owned roster and the per-conference attachments

use serde::{Deserialize, Serialize};

use crate::ids::SpeakerId;
use crate::value_objects::Occupation;

/// A roster entry as returned by the speakers list endpoint (read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSpeaker {
    #[serde(rename = "speaker_id")]
    pub id: SpeakerId,
    #[serde(rename = "speaker_name")]
    pub name: String,
    #[serde(rename = "speaker_title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "speaker_picture", default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// A roster speaker attached to a conference with a role.
///
/// `speaker_id` is unique among a conference's attachments; `occupation` is the
/// only field that changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeakerAttachment {
    pub speaker_id: SpeakerId,
    pub occupation: Occupation,
}

impl SpeakerAttachment {
    pub fn new(speaker_id: SpeakerId) -> Self {
        Self {
            speaker_id,
            occupation: Occupation::default(),
        }
    }
}
