//! Pure list editors backing the conference dialogs
//!
//! These own only local add/update/remove semantics and know nothing about
//! the backend.

mod dynamic_list;
mod speaker_picker;

pub use dynamic_list::{DynamicList, KeyOutcome};
pub use speaker_picker::{RosterOption, SpeakerPicker};
