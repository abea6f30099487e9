//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the admin API, read the session
//! token, and surface notifications without depending on concrete implementations.

pub mod api_port;
pub mod form_payload;
pub mod notification_port;
pub mod raw_api_port;
pub mod session_port;

pub use api_port::ApiError;
pub use form_payload::{FormPart, FormPayload, FormValue};
pub use notification_port::{Notification, NotificationKind, NotificationPort};
pub use raw_api_port::RawApiPort;
pub use session_port::SessionPort;

#[cfg(any(test, feature = "testing"))]
pub use notification_port::MockNotificationPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
#[cfg(any(test, feature = "testing"))]
pub use session_port::MockSessionPort;
