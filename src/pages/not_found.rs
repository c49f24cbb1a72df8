//! Fallback page for unmatched paths.

use leptos::prelude::*;

/// Not-found page. Served by the route table's fallback entry; an
/// unmatched URL is recovered here, never surfaced as an error.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The address you followed does not exist."</p>
            <a href="/" class="btn">"Back to home"</a>
        </div>
    }
}
