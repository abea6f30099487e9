//! In-memory session holder
//!
//! Sign-in happens outside this crate; the host hands the token over here and
//! every request reads it back through [`SessionPort`].

use std::sync::{Arc, PoisonError, RwLock};

use confdesk_ports::SessionPort;

#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token. Blank tokens sign out.
    pub fn sign_in(&self, token: impl Into<String>) {
        let token = token.into();
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = (!token.trim().is_empty()).then_some(token);
    }

    pub fn sign_out(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl SessionPort for SessionHandle {
    fn bearer_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
