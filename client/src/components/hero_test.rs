use super::*;
use crate::auth::testing::session_for;

#[test]
fn cta_invites_sign_up_when_signed_out() {
    let mut state = SessionState::default();
    state.adopt_initial(None);
    assert_eq!(primary_cta_label(&state), "Sign Up to Start");
}

#[test]
fn cta_reads_start_creating_when_signed_in() {
    let mut state = SessionState::default();
    state.adopt_initial(Some(session_for("ada@example.com")));
    assert_eq!(primary_cta_label(&state), "Start Creating");
}
