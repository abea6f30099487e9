//! The in-progress conference creation draft

use std::fmt;

use crate::editors::{DynamicList, SpeakerPicker};
use crate::entities::pricing::PackagePricing;
use crate::value_objects::FileAttachment;

/// Scalar fields collected on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicInfo {
    pub title: String,
    pub theme: String,
    pub venue: String,
    pub start: String,
    pub end: String,
}

/// Names the scalar first-step fields, for setters and required-field reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicInfoField {
    Title,
    Theme,
    Venue,
    Start,
    End,
}

impl BasicInfoField {
    pub fn all() -> &'static [BasicInfoField] {
        &[
            BasicInfoField::Title,
            BasicInfoField::Theme,
            BasicInfoField::Venue,
            BasicInfoField::Start,
            BasicInfoField::End,
        ]
    }

    /// Multipart field name
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicInfoField::Title => "title",
            BasicInfoField::Theme => "theme",
            BasicInfoField::Venue => "venue",
            BasicInfoField::Start => "start",
            BasicInfoField::End => "end",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BasicInfoField::Title => "Title",
            BasicInfoField::Theme => "Theme",
            BasicInfoField::Venue => "Venue",
            BasicInfoField::Start => "Start date",
            BasicInfoField::End => "End date",
        }
    }
}

impl fmt::Display for BasicInfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl BasicInfo {
    pub fn get(&self, field: BasicInfoField) -> &str {
        match field {
            BasicInfoField::Title => &self.title,
            BasicInfoField::Theme => &self.theme,
            BasicInfoField::Venue => &self.venue,
            BasicInfoField::Start => &self.start,
            BasicInfoField::End => &self.end,
        }
    }

    pub fn set(&mut self, field: BasicInfoField, value: impl Into<String>) {
        let slot = match field {
            BasicInfoField::Title => &mut self.title,
            BasicInfoField::Theme => &mut self.theme,
            BasicInfoField::Venue => &mut self.venue,
            BasicInfoField::Start => &mut self.start,
            BasicInfoField::End => &mut self.end,
        };
        *slot = value.into();
    }

    /// First required field that is blank, in form order.
    ///
    /// All five scalar fields carry the required marker; nothing beyond
    /// non-blankness is checked.
    pub fn first_missing_required(&self) -> Option<BasicInfoField> {
        BasicInfoField::all()
            .iter()
            .copied()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

/// Which repeated media list a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Gallery,
    Sponsors,
    Videos,
}

impl MediaKind {
    pub fn all() -> &'static [MediaKind] {
        &[MediaKind::Gallery, MediaKind::Sponsors, MediaKind::Videos]
    }
}

/// Everything the creation wizard has collected so far.
///
/// Lives for one dialog session. Step one fills `basic`, the three free-text
/// lists and `flyer`; step two fills the media lists, `pricing` and `speakers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDraft {
    pub basic: BasicInfo,
    pub subthemes: DynamicList,
    pub workshops: DynamicList,
    pub important_dates: DynamicList,
    pub flyer: Option<FileAttachment>,
    pub gallery: Vec<FileAttachment>,
    pub sponsors: Vec<FileAttachment>,
    pub videos: Vec<FileAttachment>,
    pub pricing: PackagePricing,
    pub speakers: SpeakerPicker,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardDraft {
    /// Empty draft; each free-text list starts with one blank slot.
    pub fn new() -> Self {
        Self {
            basic: BasicInfo::default(),
            subthemes: DynamicList::with_blank_slot(),
            workshops: DynamicList::with_blank_slot(),
            important_dates: DynamicList::with_blank_slot(),
            flyer: None,
            gallery: Vec::new(),
            sponsors: Vec::new(),
            videos: Vec::new(),
            pricing: PackagePricing::default(),
            speakers: SpeakerPicker::new(),
        }
    }

    pub fn set_basic(&mut self, field: BasicInfoField, value: impl Into<String>) {
        self.basic.set(field, value);
    }

    /// Replaces any previously chosen flyer.
    pub fn set_flyer(&mut self, flyer: Option<FileAttachment>) {
        self.flyer = flyer;
    }

    pub fn media(&self, kind: MediaKind) -> &[FileAttachment] {
        match kind {
            MediaKind::Gallery => &self.gallery,
            MediaKind::Sponsors => &self.sponsors,
            MediaKind::Videos => &self.videos,
        }
    }

    fn media_mut(&mut self, kind: MediaKind) -> &mut Vec<FileAttachment> {
        match kind {
            MediaKind::Gallery => &mut self.gallery,
            MediaKind::Sponsors => &mut self.sponsors,
            MediaKind::Videos => &mut self.videos,
        }
    }

    pub fn add_media(&mut self, kind: MediaKind, file: FileAttachment) {
        self.media_mut(kind).push(file);
    }

    pub fn remove_media(&mut self, kind: MediaKind, index: usize) -> Option<FileAttachment> {
        let files = self.media_mut(kind);
        (index < files.len()).then(|| files.remove(index))
    }
}
