//! Scriptable in-memory provider for session manager tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::listeners::{ListenerSet, Subscription};
use super::provider::{AuthError, AuthProvider};
use super::types::{AuthChange, Credentials, Identity, Session, SignUpOutcome};
use crate::state::toast::{Notifier, ToastKind};

pub(crate) fn session_for(email: &str) -> Session {
    Session {
        access_token: format!("token-{email}"),
        refresh_token: "refresh".to_owned(),
        expires_at: i64::MAX,
        user: Identity { id: format!("id-{email}"), email: Some(email.to_owned()) },
    }
}

/// Notifier that keeps every toast it is handed.
#[derive(Default)]
pub(crate) struct Recorder(pub RefCell<Vec<(ToastKind, String)>>);

impl Notifier for Recorder {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.0.borrow_mut().push((kind, message.to_owned()));
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeProvider {
    pub listeners: ListenerSet,
    pub current: Arc<Mutex<Option<Session>>>,
    pub query_error: Arc<Mutex<Option<AuthError>>>,
    pub sign_out_results: Arc<Mutex<VecDeque<Result<(), AuthError>>>>,
    pub sign_out_calls: Arc<Mutex<usize>>,
}

impl FakeProvider {
    pub fn with_session(session: Session) -> Self {
        let provider = Self::default();
        *provider.current.lock().unwrap() = Some(session);
        provider
    }

    pub fn fail_query(&self, err: AuthError) {
        *self.query_error.lock().unwrap() = Some(err);
    }

    pub fn queue_sign_out(&self, result: Result<(), AuthError>) {
        self.sign_out_results.lock().unwrap().push_back(result);
    }

    /// Simulate a change originating elsewhere (another tab, a redirect).
    pub fn push(&self, change: AuthChange) {
        self.current.lock().unwrap().clone_from(&change.session);
        self.listeners.emit(&change);
    }
}

impl AuthProvider for FakeProvider {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        if let Some(err) = self.query_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.current.lock().unwrap().clone())
    }

    fn subscribe(&self, listener: impl Fn(&AuthChange) + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.sign_out_calls.lock().unwrap() += 1;
        let result = self.sign_out_results.lock().unwrap().pop_front().unwrap_or(Ok(()));
        if result.is_ok() {
            self.push(AuthChange::signed_out());
        }
        result
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.password != "correct horse" {
            let message = "Invalid login credentials".to_owned();
            return Err(AuthError::Rejected { status: 400, message });
        }
        let session = session_for(&credentials.email);
        self.push(AuthChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        Ok(SignUpOutcome::ConfirmationSent { email: credentials.email.clone() })
    }
}
