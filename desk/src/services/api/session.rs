//! # Session
//!
//! The authentication context. The application creates one [`Session`] and
//! hands clones of it to the API client; successful authentication installs a
//! token, logout clears it, and every outgoing request reads it. Tokens live
//! in memory only.

use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the bearer token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
        tracing::info!("Session token installed");
    }

    pub fn clear(&self) {
        *self.token.write() = None;
        tracing::info!("Session token cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_token() {
        let session = Session::new();
        let handle = session.clone();

        session.set_token("t1");
        assert_eq!(handle.token().as_deref(), Some("t1"));

        handle.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let session = Session::new();
        session.set_token("secret-token");
        assert!(!format!("{:?}", session).contains("secret-token"));
    }
}
