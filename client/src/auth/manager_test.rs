use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::auth::testing::{FakeProvider, Recorder, session_for};
use crate::auth::types::AuthChange;
use crate::state::session::SessionState;
use crate::state::toast::ToastKind;

#[derive(Clone, Default)]
struct SharedSession(Arc<Mutex<SessionState>>);

impl SharedSession {
    fn snapshot(&self) -> SessionState {
        self.0.lock().unwrap().clone()
    }
}

impl SessionSink for SharedSession {
    fn modify(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.0.lock().unwrap());
    }
}

// =============================================================
// Initial query
// =============================================================

#[test]
fn load_adopts_active_session() {
    let manager = SessionManager::new(FakeProvider::with_session(session_for("ada@example.com")));
    let sink = SharedSession::default();

    block_on(manager.load(&sink));

    let state = sink.snapshot();
    assert!(!state.loading);
    assert_eq!(state.user.unwrap().email.as_deref(), Some("ada@example.com"));
}

#[test]
fn load_without_session_is_signed_out() {
    let manager = SessionManager::new(FakeProvider::default());
    let sink = SharedSession::default();
    block_on(manager.load(&sink));
    assert_eq!(sink.snapshot(), SessionState { user: None, loading: false });
}

#[test]
fn load_failure_defaults_to_signed_out() {
    let provider = FakeProvider::with_session(session_for("ada@example.com"));
    provider.fail_query(AuthError::Request("offline".to_owned()));
    let manager = SessionManager::new(provider);
    let sink = SharedSession::default();

    block_on(manager.load(&sink));

    assert_eq!(sink.snapshot(), SessionState { user: None, loading: false });
}

// =============================================================
// Listener
// =============================================================

#[test]
fn provider_sign_in_updates_identity_through_listener() {
    let manager = SessionManager::new(FakeProvider::default());
    let sink = SharedSession::default();
    let _sub = manager.attach(sink.clone());
    block_on(manager.load(&sink));
    assert!(sink.snapshot().user.is_none());

    manager.provider().push(AuthChange::signed_in(session_for("grace@example.com")));

    let user = sink.snapshot().user.unwrap();
    assert_eq!(user.display_name(), "grace@example.com");
}

#[test]
fn event_before_initial_query_wins() {
    let manager = SessionManager::new(FakeProvider::default());
    let sink = SharedSession::default();
    let _sub = manager.attach(sink.clone());

    // Emitted directly, so the provider's own record still says signed out
    // and the later query result is stale.
    manager.provider().listeners.emit(&AuthChange::signed_in(session_for("ada@example.com")));
    block_on(manager.load(&sink));

    assert!(sink.snapshot().is_signed_in());
}

#[test]
fn unsubscribe_detaches_listener() {
    let manager = SessionManager::new(FakeProvider::default());
    let sink = SharedSession::default();
    let sub = manager.attach(sink.clone());
    block_on(manager.load(&sink));

    sub.unsubscribe();
    manager.provider().push(AuthChange::signed_in(session_for("ada@example.com")));

    assert!(!sink.snapshot().is_signed_in());
    assert!(manager.provider().listeners.is_empty());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_success_notifies_and_listener_clears_identity() {
    let manager = SessionManager::new(FakeProvider::with_session(session_for("ada@example.com")));
    let sink = SharedSession::default();
    let _sub = manager.attach(sink.clone());
    block_on(manager.load(&sink));
    let notifier = Recorder::default();

    block_on(manager.logout(&notifier));

    assert_eq!(notifier.0.into_inner(), vec![(ToastKind::Success, LOGOUT_SUCCESS_MESSAGE.to_owned())]);
    assert!(!sink.snapshot().is_signed_in());
}

#[test]
fn logout_failure_notifies_and_leaves_identity() {
    let provider = FakeProvider::with_session(session_for("ada@example.com"));
    provider.queue_sign_out(Err(AuthError::Request("offline".to_owned())));
    let manager = SessionManager::new(provider);
    let sink = SharedSession::default();
    let _sub = manager.attach(sink.clone());
    block_on(manager.load(&sink));
    let notifier = Recorder::default();

    block_on(manager.logout(&notifier));

    assert_eq!(notifier.0.into_inner(), vec![(ToastKind::Error, LOGOUT_ERROR_MESSAGE.to_owned())]);
    assert!(sink.snapshot().is_signed_in());
    assert_eq!(*manager.provider().sign_out_calls.lock().unwrap(), 1);
}

#[test]
fn logout_does_not_write_state_without_provider_event() {
    let manager = SessionManager::new(FakeProvider::with_session(session_for("ada@example.com")));
    let sink = SharedSession::default();
    block_on(manager.load(&sink));

    // No listener attached: the logout call itself must not clear identity.
    block_on(manager.logout(&Recorder::default()));

    assert!(sink.snapshot().is_signed_in());
}

// =============================================================
// Sign-in / sign-up
// =============================================================

#[test]
fn sign_in_reaches_state_via_listener() {
    let manager = SessionManager::new(FakeProvider::default());
    let sink = SharedSession::default();
    let _sub = manager.attach(sink.clone());
    block_on(manager.load(&sink));

    let credentials = Credentials { email: "ada@example.com".to_owned(), password: "correct horse".to_owned() };
    let session = block_on(manager.sign_in(&credentials)).unwrap();

    assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
    assert!(sink.snapshot().is_signed_in());
}

#[test]
fn sign_in_rejection_is_returned() {
    let manager = SessionManager::new(FakeProvider::default());
    let credentials = Credentials { email: "ada@example.com".to_owned(), password: "nope".to_owned() };
    let err = block_on(manager.sign_in(&credentials)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn sign_up_passes_outcome_through() {
    let manager = SessionManager::new(FakeProvider::default());
    let credentials = Credentials { email: "ada@example.com".to_owned(), password: "secret1".to_owned() };
    let outcome = block_on(manager.sign_up(&credentials)).unwrap();
    assert_eq!(outcome, SignUpOutcome::ConfirmationSent { email: "ada@example.com".to_owned() });
}
