//! Wire-level request and response shapes for the admin API

mod envelope;
pub mod requests;

pub use envelope::ApiEnvelope;
pub use requests::{
    edit_conference_path, BasicInfoSubmission, MediaAndPricingSubmission,
    CREATE_CONFERENCE_BASIC_INFO_PATH, CREATE_CONFERENCE_MEDIA_PATH, SPEAKERS_LIST_PATH,
};
