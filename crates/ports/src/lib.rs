//! Port definitions shared by the application layer and its adapters.

pub mod outbound;

pub use outbound::{
    ApiError, FormPart, FormPayload, FormValue, Notification, NotificationKind,
    NotificationPort, RawApiPort, SessionPort,
};

#[cfg(any(test, feature = "testing"))]
pub use outbound::{MockNotificationPort, MockRawApiPort, MockSessionPort};
