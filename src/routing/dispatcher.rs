#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod dispatcher_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::routing::guard::{Decision, authorize};
use crate::routing::table::{RouteEntry, RouteTable, app_routes};
use crate::state::session::{SessionState, use_session};

/// What one navigation event dispatches to.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// Session unresolved: render the loading placeholder, navigate nowhere.
    AwaitSession,
    /// Denied: perform a replacing client-side navigation to the path.
    Redirect(&'static str),
    /// Approved: render this entry's page.
    Page(&'a RouteEntry),
}

/// Resolve `path` against the table and apply the access guard.
///
/// Pure: the only side effect of a dispatch cycle (the redirect
/// navigation) is performed by [`RouteDispatcher`], not here. Unmatched
/// paths fall back to the not-found entry, which flows through the same
/// guard so the resolving gate covers it too.
pub fn dispatch<'a>(table: &'a RouteTable, path: &str, session: &SessionState) -> Outcome<'a> {
    let entry = table.resolve(path).unwrap_or_else(|| table.fallback());
    match authorize(entry, session) {
        Decision::AwaitSession => Outcome::AwaitSession,
        Decision::Redirect(to) => Outcome::Redirect(to),
        Decision::Render => Outcome::Page(entry),
    }
}

/// Renders exactly one page for the current URL and session state.
///
/// Re-evaluates whenever either input signal changes; a navigation
/// superseded before rendering completes is simply discarded by the
/// reactive runtime, so the output never reflects a stale (path, session)
/// combination. Redirects replace the current history entry, so repeated
/// denials of the same path accumulate nothing.
#[component]
pub fn RouteDispatcher() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    let navigate = use_navigate();
    Effect::new(move || {
        let outcome = dispatch(app_routes(), &pathname.get(), &session.get());
        if let Outcome::Redirect(to) = outcome {
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match dispatch(app_routes(), &pathname.get(), &session.get()) {
        Outcome::Page(entry) => (entry.page)(),
        // The placeholder also covers the instant before a redirect lands,
        // so a denied attempt never flashes the protected page.
        Outcome::AwaitSession | Outcome::Redirect(_) => LoadingIndicator().into_any(),
    }
}
