//! Speaker roles at a conference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The closed set of roles a speaker can hold at a conference.
///
/// The wire form is the human-readable label; the backend stores it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Occupation {
    /// Default role for a newly attached speaker
    #[default]
    #[serde(rename = "Workshop Facilitator")]
    WorkshopFacilitator,
    #[serde(rename = "Key Note Address")]
    KeyNoteAddress,
    #[serde(rename = "Guest Speaker")]
    GuestSpeaker,
}

impl Occupation {
    /// All roles, in dropdown order
    pub fn all() -> &'static [Occupation] {
        &[
            Occupation::WorkshopFacilitator,
            Occupation::KeyNoteAddress,
            Occupation::GuestSpeaker,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Occupation::WorkshopFacilitator => "Workshop Facilitator",
            Occupation::KeyNoteAddress => "Key Note Address",
            Occupation::GuestSpeaker => "Guest Speaker",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Occupation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occupation::all()
            .iter()
            .copied()
            .find(|o| o.label() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown occupation: {}", s)))
    }
}
