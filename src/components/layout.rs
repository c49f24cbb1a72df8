//! Application layout: navigation bar plus the page container.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Fixed shell wrapping whatever the dispatcher produced. Opaque to
/// routing; it renders the same chrome for every outcome.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Navbar/>
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
