//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{SessionState, use_session};

/// Navigation bar with the brand, section links, and the session corner.
///
/// The session corner mirrors the live session state: empty while
/// resolving, a login link when signed out, the user and a logout link
/// when signed in. Logout is a full-page redirect owned by the backend.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    let link_class = move |path: &'static str| {
        if pathname.get() == path {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Meridian"</a>

            <div class="navbar__links">
                <a href="/" class=move || link_class("/")>"Home"</a>
                <a href="/pricing" class=move || link_class("/pricing")>"Pricing"</a>
                <a href="/dashboard" class=move || link_class("/dashboard")>"Dashboard"</a>
                <a href="/profile" class=move || link_class("/profile")>"Profile"</a>
            </div>

            {move || match session.get() {
                SessionState::Resolving => ().into_any(),
                SessionState::Unauthenticated => view! {
                    <a href="/login" class="navbar__link">"Log in"</a>
                }
                .into_any(),
                SessionState::Authenticated(user) => view! {
                    <div class="navbar__session">
                        {user
                            .avatar_url
                            .clone()
                            .map(|src| view! { <img class="navbar__avatar" src=src alt=""/> })}
                        <span class="navbar__user">{user.name.clone()}</span>
                        <a href="/auth/logout" rel="external" class="navbar__link">"Log out"</a>
                    </div>
                }
                .into_any(),
            }}
        </nav>
    }
}
