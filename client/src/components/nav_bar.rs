//! Sticky navigation bar: brand, theme toggle, anchors, and auth affordance.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::app::{AppSession, AppTheme};
use crate::content::{NAV_LINKS, PRODUCT_NAME};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::dark_mode::Theme;

/// What the right-hand side of the navigation bar offers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAuth {
    SignIn,
    SignedIn { label: String },
}

impl NavAuth {
    #[must_use]
    pub fn from_session(state: &SessionState) -> Self {
        match &state.user {
            Some(user) => Self::SignedIn { label: user.display_name().to_owned() },
            None => Self::SignIn,
        }
    }
}

/// Glyph on the theme button: the mode a click switches to.
#[must_use]
pub fn theme_toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let theme = expect_context::<AppTheme>();
    let manager = expect_context::<AppSession>();

    let on_toggle_theme = move |_| {
        // Controller first; the ui flag only mirrors it for rendering.
        if let Some(next) = theme.try_update_value(|c| c.toggle()) {
            ui.update(|u| u.theme = next);
        }
    };

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                manager.logout(&toasts).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&manager, toasts);
        }
    });

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="#" class="nav__brand">
                    <span class="nav__logo" aria-hidden="true">"🤖"</span>
                    <span class="nav__name">{PRODUCT_NAME}</span>
                </a>
                <div class="nav__actions">
                    <button
                        class="btn nav__theme-toggle"
                        on:click=on_toggle_theme
                        aria-label="Toggle dark mode"
                        title="Toggle dark mode"
                    >
                        {move || theme_toggle_glyph(ui.get().theme)}
                    </button>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav__link">{link.label}</a> })
                        .collect_view()}
                    {move || match NavAuth::from_session(&session.get()) {
                        NavAuth::SignedIn { label } => {
                            view! {
                                <div class="nav__session">
                                    <span class="nav__identity">{label}</span>
                                    <button class="btn nav__logout" on:click=move |_| on_logout.run(())>
                                        <span aria-hidden="true">"⎋"</span>
                                        <span>"Logout"</span>
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        NavAuth::SignIn => {
                            view! {
                                <button
                                    class="btn btn--primary nav__sign-in"
                                    on:click=move |_| ui.update(UiState::open_auth_modal)
                                >
                                    "Sign In"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
