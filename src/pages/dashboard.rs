//! Dashboard page for signed-in users.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Dashboard page. Only reachable through the protected route, so the
/// session is already confirmed by the time this renders; the user lookup
/// still degrades to a generic greeting rather than assuming it.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .get()
            .user()
            .map_or_else(|| "Welcome back".to_owned(), |u| format!("Welcome back, {}", u.name))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>

            <div class="dashboard-page__grid">
                <section class="dashboard-page__card">
                    <h2>"Usage"</h2>
                    <p>"Your workspace activity will appear here."</p>
                </section>
                <section class="dashboard-page__card">
                    <h2>"Subscription"</h2>
                    <p>"Manage your plan from the pricing page."</p>
                </section>
                <section class="dashboard-page__card">
                    <h2>"Getting started"</h2>
                    <p>"Invite your team and connect your first project."</p>
                </section>
            </div>
        </div>
    }
}
