//! The auth provider boundary consumed by the session manager.
//!
//! ERROR HANDLING
//! ==============
//! Provider calls return [`AuthError`]; the UI layer turns errors into
//! toasts instead of propagating them, so a failed call never tears down the
//! page.

use std::future::Future;

use super::listeners::Subscription;
use super::types::{AuthChange, Credentials, Session, SignUpOutcome};

/// Failures reported by an [`AuthProvider`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No provider URL/key was configured at build time.
    #[error("auth provider is not configured")]
    NotConfigured,

    /// The HTTP request could not be sent or completed.
    #[error("auth request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider response body could not be deserialized.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// Provider calls only run in the browser.
    #[error("auth is not available on the server")]
    Unavailable,
}

/// External authentication service.
///
/// `get_session` and `subscribe` are the two capabilities the session
/// manager needs to mirror state; the remaining calls are user-triggered.
pub trait AuthProvider: Send + Sync + 'static {
    /// Current session, if any. May fail transiently.
    fn get_session(&self) -> impl Future<Output = Result<Option<Session>, AuthError>>;

    /// Register a listener for subsequent session changes.
    fn subscribe(&self, listener: impl Fn(&AuthChange) + Send + Sync + 'static) -> Subscription;

    /// End the current session. Success is announced through listeners.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;

    fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Session, AuthError>>;

    fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SignUpOutcome, AuthError>>;
}
