//! Login page with a hosted-identity redirect button.

use leptos::prelude::*;

/// Login page; the button navigates to the identity provider's hosted
/// login endpoint, a full-page redirect owned by the backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Meridian"</h1>
            <p>"Sign in to reach your dashboard and profile."</p>
            <a href="/auth/login" class="login-page__button" rel="external">
                "Sign in"
            </a>
        </div>
    }
}
