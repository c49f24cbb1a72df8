//! Public pricing page with static plan tiers.

use leptos::prelude::*;

/// Pricing page shown at `/pricing`.
#[component]
pub fn PricingPage() -> impl IntoView {
    let tiers = [
        ("Starter", "$0", "For trying things out"),
        ("Team", "$29", "Per seat, billed monthly"),
        ("Business", "$99", "Priority support and SSO"),
    ];

    view! {
        <div class="pricing-page">
            <h1>"Pricing"</h1>
            <div class="pricing-page__tiers">
                {tiers
                    .into_iter()
                    .map(|(name, price, blurb)| {
                        view! {
                            <section class="pricing-page__tier">
                                <h2>{name}</h2>
                                <p class="pricing-page__price">{price}</p>
                                <p>{blurb}</p>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
