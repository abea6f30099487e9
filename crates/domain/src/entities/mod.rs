//! Domain entities - Client-held view models for conference administration

mod conference;
mod draft;
mod pricing;
mod speaker;

pub use conference::{Attendance, Conference, Currency, PaymentPlan, PlanAmounts};
pub use draft::{BasicInfo, BasicInfoField, MediaKind, WizardDraft};
pub use pricing::{PackagePricing, PricingTier, TierName};
pub use speaker::{AvailableSpeaker, SpeakerAttachment};
