//! Confdesk domain layer.
//!
//! Client-held view models for the conference administration dialogs and the
//! pure, I/O-free editors that mutate them. The server is the system of record;
//! nothing here is persisted.

pub mod editors;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use editors::{DynamicList, KeyOutcome, RosterOption, SpeakerPicker};
pub use entities::{
    Attendance, AvailableSpeaker, BasicInfo, BasicInfoField, Conference, Currency, MediaKind,
    PackagePricing, PaymentPlan, PlanAmounts, PricingTier, SpeakerAttachment, TierName,
    WizardDraft,
};
pub use error::DomainError;
pub use ids::{ConferenceId, SpeakerId};
pub use value_objects::{CorrelationToken, FileAttachment, Occupation};
