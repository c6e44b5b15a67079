//! Supabase (GoTrue) auth client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted
//! in `localStorage` under the same key the Supabase JS client uses, and
//! cross-tab changes picked up from the window `storage` event.
//! Server-side (SSR): every network call fails with
//! [`AuthError::Unavailable`]; the server never sees a session.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are mapped to [`AuthError::Rejected`] carrying the
//! provider's human-readable message so the auth modal can show it as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use super::listeners::{ListenerSet, Subscription};
use super::provider::{AuthError, AuthProvider};
#[cfg(any(test, feature = "hydrate"))]
use super::types::Identity;
use super::types::{AuthChange, Credentials, Session, SignUpOutcome};

/// Project URL and public anon key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Build from raw values; `None` when either is missing or blank.
    #[must_use]
    pub fn new(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|k| !k.is_empty())?;
        Some(Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Values baked in at build time from `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
    #[must_use]
    pub fn from_build_env() -> Option<Self> {
        Self::new(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// First host label of the project URL (`abcd` in `https://abcd.supabase.co`).
    #[must_use]
    pub fn project_ref(&self) -> &str {
        let host = self.url.split("://").nth(1).unwrap_or(&self.url);
        host.split(['.', ':', '/']).next().filter(|r| !r.is_empty()).unwrap_or("local")
    }

    /// Local storage key holding the persisted session.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

/// Session-bearing token response (`/token`, auto-confirmed `/signup`).
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: Identity,
}

/// Error body shapes returned by GoTrue across versions.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Parse a token response into a session; `now_secs` fills in `expires_at`
/// when the provider only sends `expires_in`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_session(body: &str, now_secs: i64) -> Result<Session, AuthError> {
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
    let expires_at = token
        .expires_at
        .unwrap_or_else(|| now_secs + token.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS));
    Ok(Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at,
        user: token.user,
    })
}

/// Parse a `/signup` response: a session when the project auto-confirms,
/// otherwise the bare user record.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_sign_up(body: &str, requested_email: &str, now_secs: i64) -> Result<SignUpOutcome, AuthError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
    if value.get("access_token").is_some() {
        return parse_session(body, now_secs).map(SignUpOutcome::SignedIn);
    }
    let user = value.get("user").cloned().unwrap_or(value);
    let identity: Identity = serde_json::from_value(user).map_err(|e| AuthError::Parse(e.to_string()))?;
    Ok(SignUpOutcome::ConfirmationSent { email: identity.email.unwrap_or_else(|| requested_email.to_owned()) })
}

/// Map a non-success response to [`AuthError::Rejected`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn rejection(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| format!("auth request failed: {status}"));
    AuthError::Rejected { status, message }
}

/// Whether a sign-out rejection means the server-side session is already gone.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn session_already_gone(err: &AuthError) -> bool {
    matches!(err, AuthError::Rejected { status: 401 | 403 | 404, .. })
}

/// Translate a cross-tab storage write into a session change.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn change_from_storage(new_value: Option<&str>) -> AuthChange {
    match new_value.and_then(|raw| serde_json::from_str::<Session>(raw).ok()) {
        Some(session) => AuthChange::signed_in(session),
        None => AuthChange::signed_out(),
    }
}

/// [`AuthProvider`] backed by a Supabase project.
pub struct SupabaseAuth {
    config: Option<SupabaseConfig>,
    listeners: ListenerSet,
}

impl SupabaseAuth {
    #[must_use]
    pub fn new(config: Option<SupabaseConfig>) -> Self {
        let auth = Self { config, listeners: ListenerSet::default() };
        #[cfg(feature = "hydrate")]
        if let Some(config) = &auth.config {
            watch_other_tabs(config.storage_key(), auth.listeners.clone());
        }
        auth
    }

    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(SupabaseConfig::from_build_env())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }
}

#[cfg(feature = "hydrate")]
impl SupabaseAuth {
    fn config(&self) -> Result<&SupabaseConfig, AuthError> {
        self.config.as_ref().ok_or(AuthError::NotConfigured)
    }

    async fn refresh(&self, config: &SupabaseConfig, stale: &Session) -> Result<Option<Session>, AuthError> {
        let payload = serde_json::json!({ "refresh_token": stale.refresh_token });
        match post_json(config, "token?grant_type=refresh_token", None, &payload).await {
            Ok(body) => {
                let session = parse_session(&body, now_secs())?;
                persist(config, &session);
                self.listeners.emit(&AuthChange {
                    event: super::types::AuthEvent::TokenRefreshed,
                    session: Some(session.clone()),
                });
                Ok(Some(session))
            }
            Err(AuthError::Rejected { status, message }) => {
                log::info!("stored session could not be refreshed ({status}): {message}");
                clear(config);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl AuthProvider for SupabaseAuth {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let Some(session) = stored_session(config) else {
                return Ok(None);
            };
            if session.is_expired(now_secs()) {
                return self.refresh(config, &session).await;
            }
            Ok(Some(session))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    fn subscribe(&self, listener: impl Fn(&AuthChange) + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            if let Some(session) = stored_session(config) {
                match post_json(config, "logout", Some(&session.access_token), &serde_json::json!({})).await {
                    Ok(_) => {}
                    Err(e) if session_already_gone(&e) => {
                        log::info!("server session already ended: {e}");
                    }
                    Err(e) => return Err(e),
                }
            }
            clear(config);
            self.listeners.emit(&AuthChange::signed_out());
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let payload = serde_json::to_value(credentials).map_err(|e| AuthError::Parse(e.to_string()))?;
            let body = post_json(config, "token?grant_type=password", None, &payload).await?;
            let session = parse_session(&body, now_secs())?;
            persist(config, &session);
            self.listeners.emit(&AuthChange::signed_in(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let payload = serde_json::to_value(credentials).map_err(|e| AuthError::Parse(e.to_string()))?;
            let body = post_json(config, "signup", None, &payload).await?;
            let outcome = parse_sign_up(&body, &credentials.email, now_secs())?;
            if let SignUpOutcome::SignedIn(session) = &outcome {
                persist(config, session);
                self.listeners.emit(&AuthChange::signed_in(session.clone()));
            }
            Ok(outcome)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn stored_session(config: &SupabaseConfig) -> Option<Session> {
    crate::util::storage::load_json(&crate::util::storage::LocalStorage, &config.storage_key())
}

#[cfg(feature = "hydrate")]
fn persist(config: &SupabaseConfig, session: &Session) {
    crate::util::storage::save_json(&crate::util::storage::LocalStorage, &config.storage_key(), session);
}

#[cfg(feature = "hydrate")]
fn clear(config: &SupabaseConfig) {
    use crate::util::storage::KeyValueStore as _;
    crate::util::storage::LocalStorage.remove(&config.storage_key());
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// POST a JSON body and return the response text, or a rejection.
#[cfg(feature = "hydrate")]
async fn post_json(
    config: &SupabaseConfig,
    path: &str,
    bearer: Option<&str>,
    payload: &serde_json::Value,
) -> Result<String, AuthError> {
    let token = bearer.unwrap_or(&config.anon_key);
    let resp = gloo_net::http::Request::post(&config.endpoint(path))
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {token}"))
        .json(payload)
        .map_err(|e| AuthError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| AuthError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(rejection(status, &body));
    }
    Ok(body)
}

/// Re-broadcast session writes made by other tabs of the same origin.
#[cfg(feature = "hydrate")]
fn watch_other_tabs(storage_key: String, listeners: ListenerSet) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        if ev.key().as_deref() != Some(storage_key.as_str()) {
            return;
        }
        listeners.emit(&change_from_storage(ev.new_value().as_deref()));
    });
    if window
        .add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not watch storage events; other tabs will not sync");
    }
    // Lives as long as the page.
    handler.forget();
}
