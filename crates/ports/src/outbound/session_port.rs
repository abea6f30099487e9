//! Session Port - bearer token provider
//!
//! Session acquisition and refresh happen elsewhere. Consumers only read the
//! current token, so implementations must be cheap to call per request.

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SessionPort: Send + Sync {
    /// The current bearer token, or `None` when signed out.
    fn bearer_token(&self) -> Option<String>;
}
