//! Mirror of the provider's session for identity-dependent rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session manager (initial query and provider
//! listener). Components read it to choose between sign-in affordances and
//! the signed-in identity.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::auth::types::{AuthChange, Identity, Session};

/// Current identity plus whether the initial provider query is outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Adopt the result of the one-time session query.
    ///
    /// Returns `false` and leaves state untouched when a provider event has
    /// already been applied, since that event is newer than the query.
    pub fn adopt_initial(&mut self, session: Option<Session>) -> bool {
        if !self.loading {
            return false;
        }
        self.user = session.map(|s| s.user);
        self.loading = false;
        true
    }

    /// Apply a provider-pushed change.
    pub fn apply_change(&mut self, change: &AuthChange) {
        self.user = change.session.as_ref().map(|s| s.user.clone());
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Write access to a [`SessionState`] owner.
pub trait SessionSink: Clone + Send + Sync + 'static {
    fn modify(&self, f: impl FnOnce(&mut SessionState));
}

impl SessionSink for RwSignal<SessionState> {
    fn modify(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }
}
