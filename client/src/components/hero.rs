//! Hero section: headline, calls to action, and showcase tiles.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::content::SHOWCASE;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Label on the primary call to action.
#[must_use]
pub fn primary_cta_label(state: &SessionState) -> &'static str {
    if state.is_signed_in() { "Start Creating" } else { "Sign Up to Start" }
}

#[component]
pub fn Hero() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_primary = move |_| {
        let current = session.get_untracked();
        ui.update(|u| {
            u.request_auth(&current);
        });
    };

    view! {
        <header class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">
                    "Transform Your Ideas Into"
                    <span class="hero__accent">" Professional Podcasts"</span>
                </h1>
                <p class="hero__lede">
                    "Harness the power of AI to create engaging, professional-quality podcasts in minutes. "
                    "No technical expertise required."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary btn--large" on:click=on_primary>
                        {move || primary_cta_label(&session.get())}
                        <span aria-hidden="true">" ›"</span>
                    </button>
                    <button class="btn btn--outline btn--large">
                        "Watch Demo"
                        <span aria-hidden="true">" ▶"</span>
                    </button>
                </div>
                <div class="hero__showcase">
                    {SHOWCASE
                        .iter()
                        .map(|tile| {
                            view! {
                                <a href="#" class="showcase-tile">
                                    <div class="showcase-tile__shade"></div>
                                    <img class="showcase-tile__image" src=tile.image_url alt=tile.image_alt/>
                                    <div class="showcase-tile__caption">
                                        <h3>{tile.title}</h3>
                                        <p>{tile.blurb}</p>
                                        <span aria-hidden="true">"→"</span>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}
