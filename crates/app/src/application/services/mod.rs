//! Application services
//!
//! Services implement use cases against port traits, never against concrete
//! infrastructure.

pub mod conference_service;

pub use conference_service::ConferenceService;
