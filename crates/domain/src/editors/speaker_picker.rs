//! Attaching roster speakers to a conference

use crate::entities::{AvailableSpeaker, SpeakerAttachment};
use crate::ids::SpeakerId;
use crate::value_objects::Occupation;

/// A roster entry as shown in the picker dropdown.
///
/// Attached speakers stay visible but disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterOption<'a> {
    pub speaker: &'a AvailableSpeaker,
    pub disabled: bool,
}

/// Ordered speaker attachments with at most one entry per speaker id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerPicker {
    attachments: Vec<SpeakerAttachment>,
}

impl SpeakerPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load existing attachments. Later duplicates of an id are dropped.
    pub fn from_attachments(attachments: impl IntoIterator<Item = SpeakerAttachment>) -> Self {
        let mut picker = Self::new();
        for attachment in attachments {
            if !picker.is_attached(attachment.speaker_id) {
                picker.attachments.push(attachment);
            }
        }
        picker
    }

    pub fn attachments(&self) -> &[SpeakerAttachment] {
        &self.attachments
    }

    pub fn into_attachments(self) -> Vec<SpeakerAttachment> {
        self.attachments
    }

    pub fn is_attached(&self, id: SpeakerId) -> bool {
        self.attachments.iter().any(|a| a.speaker_id == id)
    }

    /// Attach `id` with the default occupation.
    ///
    /// Selecting an already attached speaker is a silent no-op. The dropdown
    /// disables those entries too, but this guard does not rely on it.
    pub fn select_speaker(&mut self, id: SpeakerId) -> bool {
        if self.is_attached(id) {
            return false;
        }
        self.attachments.push(SpeakerAttachment::new(id));
        true
    }

    pub fn change_role(&mut self, index: usize, occupation: Occupation) -> bool {
        match self.attachments.get_mut(index) {
            Some(attachment) => {
                attachment.occupation = occupation;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<SpeakerAttachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    /// Every roster entry, flagged disabled when already attached.
    pub fn roster_options<'a>(&self, roster: &'a [AvailableSpeaker]) -> Vec<RosterOption<'a>> {
        roster
            .iter()
            .map(|speaker| RosterOption {
                speaker,
                disabled: self.is_attached(speaker.id),
            })
            .collect()
    }
}
