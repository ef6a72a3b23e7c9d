//! Session flag consulted by the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow stores an opaque token; routing only cares whether one is
//! present. The token's content and expiry are never inspected here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Snapshot of the persisted auth token, taken at navigation time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionFlag(Option<String>);

impl SessionFlag {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn present(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// A stored, non-empty token counts as signed in.
    pub fn is_authenticated(&self) -> bool {
        self.0.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// The token, when it counts as signed in.
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref().filter(|token| !token.is_empty())
    }
}

impl From<Option<String>> for SessionFlag {
    fn from(token: Option<String>) -> Self {
        Self(token)
    }
}
