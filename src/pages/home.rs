//! Public landing page.

use leptos::prelude::*;

/// Landing page shown at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Meridian"</h1>
            <p class="home-page__tagline">
                "One place for your team's projects, usage, and billing."
            </p>
            <div class="home-page__actions">
                <a href="/pricing" class="btn">"See pricing"</a>
                <a href="/dashboard" class="btn btn--primary">"Go to dashboard"</a>
            </div>
        </div>
    }
}
