use super::*;

use leptos::prelude::*;

use crate::net::types::User;
use crate::routing::table::{Access, PageFn, RouteEntry};
use crate::state::session::SessionState;

fn blank() -> AnyView {
    ().into_any()
}

fn public_route() -> RouteEntry {
    RouteEntry {
        path: "/pricing",
        access: Access::Public,
        page: blank as PageFn,
    }
}

fn protected_route() -> RouteEntry {
    RouteEntry {
        path: "/dashboard",
        access: Access::Protected,
        page: blank as PageFn,
    }
}

fn authenticated() -> SessionState {
    SessionState::Authenticated(User {
        id: "auth0|6540f1".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        avatar_url: None,
    })
}

// =============================================================
// Resolving gates everything
// =============================================================

#[test]
fn resolving_awaits_on_public_routes() {
    let decision = authorize(&public_route(), &SessionState::Resolving);
    assert_eq!(decision, Decision::AwaitSession);
}

#[test]
fn resolving_awaits_on_protected_routes() {
    let decision = authorize(&protected_route(), &SessionState::Resolving);
    assert_eq!(decision, Decision::AwaitSession);
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_renders_when_authenticated() {
    assert_eq!(authorize(&public_route(), &authenticated()), Decision::Render);
}

#[test]
fn public_renders_when_unauthenticated() {
    assert_eq!(
        authorize(&public_route(), &SessionState::Unauthenticated),
        Decision::Render
    );
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_renders_only_when_authenticated() {
    assert_eq!(
        authorize(&protected_route(), &authenticated()),
        Decision::Render
    );
}

#[test]
fn protected_redirects_to_login_when_unauthenticated() {
    assert_eq!(
        authorize(&protected_route(), &SessionState::Unauthenticated),
        Decision::Redirect("/login")
    );
}

#[test]
fn redirect_target_is_the_login_path() {
    assert_eq!(LOGIN_PATH, "/login");
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn authorize_is_deterministic_for_identical_inputs() {
    let route = protected_route();
    let first = authorize(&route, &SessionState::Unauthenticated);
    let second = authorize(&route, &SessionState::Unauthenticated);
    assert_eq!(first, second);
}
