//! Pricing tiers. Every tier's button routes signed-out visitors to the
//! auth modal and does nothing for signed-in ones.

use leptos::prelude::*;

use crate::content::{PRICING_TIERS, PricingTier};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn PricingCard(tier: &'static PricingTier, on_select: Callback<()>) -> impl IntoView {
    view! {
        <div class="pricing-card" class:pricing-card--featured=tier.highlighted>
            <h3 class="pricing-card__title">{tier.title}</h3>
            <div class="pricing-card__price">
                <span class="pricing-card__amount">{tier.price_label()}</span>
                <span class="pricing-card__period">"/month"</span>
            </div>
            <ul class="pricing-card__features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <span aria-hidden="true">"✦ "</span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn pricing-card__select" on:click=move |_| on_select.run(())>
                "Get Started"
            </button>
        </div>
    }
}

#[component]
pub fn PricingSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_select = Callback::new(move |()| {
        let current = session.get_untracked();
        ui.update(|u| {
            u.request_auth(&current);
        });
    });

    view! {
        <section id="pricing" class="section section--pricing">
            <h2 class="section__title">"Simple Pricing"</h2>
            <div class="section__grid">
                {PRICING_TIERS.iter().map(|tier| view! { <PricingCard tier=tier on_select=on_select/> }).collect_view()}
            </div>
        </section>
    }
}
