//! "How It Works" feature cards.

use leptos::prelude::*;

use crate::content::{FEATURES, Feature};

#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon" aria-hidden="true">{feature.icon}</div>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="section section--features">
            <h2 class="section__title">"How It Works"</h2>
            <div class="section__grid">
                {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
            </div>
        </section>
    }
}
