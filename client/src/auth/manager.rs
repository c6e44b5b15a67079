//! Session manager: mirrors provider state into UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` attaches the manager to the session signal once, loads the initial
//! session, and unsubscribes on cleanup. Navigation and the auth modal call
//! `logout`/`sign_in`/`sign_up`. None of these calls write the session
//! state directly; provider events delivered through the listener are the
//! only source of identity changes after the initial query.
//!
//! ERROR HANDLING
//! ==============
//! A failed initial query degrades to "signed out" with a logged warning.
//! Sign-out failures become an error toast.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::Arc;

use super::listeners::Subscription;
use super::provider::{AuthError, AuthProvider};
use super::types::{Credentials, Session, SignUpOutcome};
use crate::state::session::SessionSink;
use crate::state::toast::Notifier;

pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const LOGOUT_ERROR_MESSAGE: &str = "Error logging out";

pub struct SessionManager<P> {
    provider: Arc<P>,
}

impl<P> Clone for SessionManager<P> {
    fn clone(&self) -> Self {
        Self { provider: Arc::clone(&self.provider) }
    }
}

impl<P: AuthProvider> SessionManager<P> {
    pub fn new(provider: P) -> Self {
        Self { provider: Arc::new(provider) }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Register a listener that applies every provider change to `sink`.
    pub fn attach<S: SessionSink>(&self, sink: S) -> Subscription {
        self.provider.subscribe(move |change| {
            log::debug!("session change: {:?}", change.event);
            sink.modify(|state| state.apply_change(change));
        })
    }

    /// Query the provider once and adopt the result as initial state.
    pub async fn load<S: SessionSink>(&self, sink: &S) {
        let session = match self.provider.get_session().await {
            Ok(session) => session,
            Err(e) => {
                log::warn!("session query failed, treating as signed out: {e}");
                None
            }
        };
        sink.modify(|state| {
            if !state.adopt_initial(session) {
                log::debug!("initial session superseded by a provider event");
            }
        });
    }

    /// Request sign-out and report the outcome through `notifier`.
    pub async fn logout<N: Notifier>(&self, notifier: &N) {
        match self.provider.sign_out().await {
            Ok(()) => notifier.success(LOGOUT_SUCCESS_MESSAGE),
            Err(e) => {
                log::warn!("sign-out failed: {e}");
                notifier.error(LOGOUT_ERROR_MESSAGE);
            }
        }
    }

    /// Password sign-in.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when the credentials are rejected or the
    /// request fails.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.provider.sign_in_with_password(credentials).await
    }

    /// Account registration.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when registration is refused or the
    /// request fails.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        self.provider.sign_up(credentials).await
    }
}
