//! The marketing landing page.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::{
    auth_modal::AuthModal, features::FeaturesSection, footer::Footer, hero::Hero, nav_bar::NavBar,
    pricing::PricingSection, toaster::Toaster,
};
use crate::state::ui::UiState;

/// Landing page: navigation, hero, features, pricing, footer, plus the auth
/// modal and toast overlays.
#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="landing" class:dark=move || ui.get().theme.is_dark()>
            <Toaster/>
            <AuthModal/>
            <NavBar/>
            <Hero/>
            <FeaturesSection/>
            <PricingSection/>
            <Footer/>
        </div>
    }
}
