use super::*;
use crate::auth::testing::session_for;
use crate::auth::types::{AuthChange, Identity};

#[test]
fn signed_out_shows_sign_in() {
    let mut state = SessionState::default();
    assert_eq!(NavAuth::from_session(&state), NavAuth::SignIn);
    state.adopt_initial(None);
    assert_eq!(NavAuth::from_session(&state), NavAuth::SignIn);
}

#[test]
fn signed_in_shows_email() {
    let mut state = SessionState::default();
    state.adopt_initial(Some(session_for("ada@example.com")));
    assert_eq!(NavAuth::from_session(&state), NavAuth::SignedIn { label: "ada@example.com".to_owned() });
}

#[test]
fn identity_without_email_shows_id() {
    let state = SessionState {
        user: Some(Identity { id: "u-42".to_owned(), email: None }),
        loading: false,
    };
    assert_eq!(NavAuth::from_session(&state), NavAuth::SignedIn { label: "u-42".to_owned() });
}

#[test]
fn provider_change_switches_affordance() {
    let mut state = SessionState::default();
    state.adopt_initial(None);
    state.apply_change(&AuthChange::signed_in(session_for("grace@example.com")));
    assert_eq!(NavAuth::from_session(&state), NavAuth::SignedIn { label: "grace@example.com".to_owned() });
}

#[test]
fn theme_glyph_shows_target_mode() {
    assert_eq!(theme_toggle_glyph(Theme::Dark), "☀");
    assert_eq!(theme_toggle_glyph(Theme::Light), "☾");
}
