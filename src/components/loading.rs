//! Loading placeholder shown while the session resolves.

use leptos::prelude::*;

/// Spinner placeholder. Rendered by the dispatcher for every path until
/// the identity check answers, and briefly while a redirect lands.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <div class="loading-indicator__spinner" aria-hidden="true"></div>
            <p>"Loading..."</p>
        </div>
    }
}
