use super::*;

fn session(expires_at: i64) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at,
        user: Identity { id: "u1".to_owned(), email: Some("ada@example.com".to_owned()) },
    }
}

#[test]
fn display_name_prefers_email() {
    let user = Identity { id: "u1".to_owned(), email: Some("ada@example.com".to_owned()) };
    assert_eq!(user.display_name(), "ada@example.com");
}

#[test]
fn display_name_falls_back_to_id() {
    let user = Identity { id: "u1".to_owned(), email: None };
    assert_eq!(user.display_name(), "u1");
}

#[test]
fn identity_ignores_unknown_provider_fields() {
    let raw = r#"{"id":"u1","email":"a@b.com","aud":"authenticated","app_metadata":{}}"#;
    let user: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(user, Identity { id: "u1".to_owned(), email: Some("a@b.com".to_owned()) });
}

#[test]
fn session_expiry_applies_margin() {
    let s = session(1_000);
    assert!(!s.is_expired(1_000 - EXPIRY_MARGIN_SECS - 1));
    assert!(s.is_expired(1_000 - EXPIRY_MARGIN_SECS));
    assert!(s.is_expired(2_000));
}

#[test]
fn auth_change_constructors() {
    let change = AuthChange::signed_in(session(5));
    assert_eq!(change.event, AuthEvent::SignedIn);
    assert!(change.session.is_some());

    let change = AuthChange::signed_out();
    assert_eq!(change.event, AuthEvent::SignedOut);
    assert!(change.session.is_none());
}
