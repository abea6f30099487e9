//! Server-issued token tying the two halves of a conference creation together

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Opaque token returned by the basic-info submission.
///
/// The client never derives or regenerates one; it is passed back verbatim
/// with the media-and-pricing submission. Only non-blank tokens can exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CorrelationToken(String);

impl CorrelationToken {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DomainError::validation("Correlation token cannot be empty"));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CorrelationToken {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CorrelationToken> for String {
    fn from(token: CorrelationToken) -> String {
        token.0
    }
}
