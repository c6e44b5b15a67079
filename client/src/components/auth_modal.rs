//! Sign-in / sign-up modal backed by the session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the navigation bar, the hero call to action, and the pricing
//! buttons via `UiState::auth_modal_open`. A successful sign-in reaches the
//! rest of the page through the provider listener, not through this
//! component.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::auth::manager::SessionManager;
use crate::auth::provider::{AuthError, AuthProvider};
use crate::auth::types::{Credentials, SignUpOutcome};
use crate::state::toast::{Notifier, ToastState};
use crate::state::ui::UiState;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const SIGN_IN_SUCCESS_MESSAGE: &str = "Signed in successfully";
pub const CONFIRM_EMAIL_MESSAGE: &str = "Check your email to confirm your account";
const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";
const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back",
            Self::SignUp => "Create your account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Trim and check form input.
///
/// # Errors
///
/// Returns the message to show under the form when the email is blank or
/// lacks an `@`, or the password is shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(INVALID_EMAIL_MESSAGE);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD_MESSAGE);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Toast text after a successful sign-up request.
#[must_use]
pub fn sign_up_message(outcome: &SignUpOutcome) -> &'static str {
    match outcome {
        SignUpOutcome::SignedIn(_) => SIGN_IN_SUCCESS_MESSAGE,
        SignUpOutcome::ConfirmationSent { .. } => CONFIRM_EMAIL_MESSAGE,
    }
}

/// Send the form to the provider and toast the outcome.
///
/// # Errors
///
/// Returns the provider error after it has been toasted, so the form can
/// also show it inline and stay open.
pub async fn submit_credentials<P: AuthProvider, N: Notifier>(
    manager: &SessionManager<P>,
    mode: AuthMode,
    credentials: &Credentials,
    notifier: &N,
) -> Result<(), AuthError> {
    let outcome = match mode {
        AuthMode::SignIn => manager.sign_in(credentials).await.map(|_| SIGN_IN_SUCCESS_MESSAGE),
        AuthMode::SignUp => manager.sign_up(credentials).await.map(|o| sign_up_message(&o)),
    };
    match outcome {
        Ok(message) => {
            notifier.success(message);
            Ok(())
        }
        Err(e) => {
            log::info!("{mode:?} failed: {e}");
            notifier.error(&e.to_string());
            Err(e)
        }
    }
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let manager = expect_context::<AppSession>();

    let mode = RwSignal::new(AuthMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let email_ref = NodeRef::<leptos::html::Input>::new();

    // Keyboard focus moves into the dialog so Escape reaches it right away.
    Effect::new(move || {
        if ui.get().auth_modal_open {
            if let Some(input) = email_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let close = Callback::new(move |()| {
        ui.update(UiState::close_auth_modal);
        password.set(String::new());
        error.set(None);
    });

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let checked = validate_credentials(&email.get_untracked(), &password.get_untracked());
        let credentials = match checked {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            let current_mode = mode.get_untracked();
            leptos::task::spawn_local(async move {
                match submit_credentials(&manager, current_mode, &credentials, &toasts).await {
                    Ok(()) => close.run(()),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &manager, toasts, close);
            busy.set(false);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close.run(());
        }
    };

    view! {
        <Show when=move || ui.get().auth_modal_open>
            <div class="auth-modal__backdrop" on:click=move |_| close.run(())>
                <div
                    class="auth-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="auth-modal__header">
                        <h2>{move || mode.get().title()}</h2>
                        <button class="auth-modal__close" on:click=move |_| close.run(()) title="Close">
                            "✕"
                        </button>
                    </div>
                    <form class="auth-modal__form" on:submit=move |ev| on_submit.run(ev)>
                        <input
                            class="auth-modal__input"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            autofocus=true
                            node_ref=email_ref
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-modal__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="auth-modal__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary auth-modal__submit" type="submit" disabled=move || busy.get()>
                            {move || mode.get().submit_label()}
                        </button>
                    </form>
                    <button
                        class="auth-modal__switch"
                        on:click=move |_| {
                            mode.update(|m| *m = m.toggled());
                            error.set(None);
                        }
                    >
                        {move || mode.get().switch_label()}
                    </button>
                </div>
            </div>
        </Show>
    }
}
