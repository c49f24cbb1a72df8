//! Root application component: session provider, router, layout, dispatcher.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::layout::Layout;
use crate::routing::RouteDispatcher;
use crate::state::session::{ResolutionPolicy, SessionState, spawn_session_resolver};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the writable session signal: it is created here, handed to the
/// one-shot resolver, and exposed to the rest of the tree read-only. The
/// router supplies navigation events; the dispatcher consumes both inside
/// the fixed layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::Resolving);
    provide_context(session.read_only());
    spawn_session_resolver(session, ResolutionPolicy::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/meridian.css"/>
        <Title text="Meridian"/>

        <Router>
            <Layout>
                <RouteDispatcher/>
            </Layout>
        </Router>
    }
}
