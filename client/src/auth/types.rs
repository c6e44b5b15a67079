//! Identity and session records issued by the auth provider.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Seconds before `expires_at` at which a session is treated as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 10;

/// The signed-in user as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    /// Label shown in the navigation bar: the email, or the id when the
    /// account has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// A provider-issued session. Persisted by the provider, never by the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub user: Identity,
}

impl Session {
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at - EXPIRY_MARGIN_SECS <= now_secs
    }
}

/// Email + password pair submitted by the auth modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a sign-up request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider signed the user in immediately.
    SignedIn(Session),
    /// The provider sent a confirmation email; no session yet.
    ConfirmationSent { email: String },
}

/// Why the session changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A provider-pushed session change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

impl AuthChange {
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { event: AuthEvent::SignedIn, session: Some(session) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { event: AuthEvent::SignedOut, session: None }
    }
}
