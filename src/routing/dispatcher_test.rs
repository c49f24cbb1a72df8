use super::*;

use crate::net::types::User;
use crate::routing::table::app_routes;
use crate::state::session::SessionState;

fn authenticated() -> SessionState {
    SessionState::Authenticated(User {
        id: "auth0|6540f1".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        avatar_url: None,
    })
}

/// Stable identity of an outcome, since entries hold page fn pointers.
fn fingerprint(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::AwaitSession => "await".to_owned(),
        Outcome::Redirect(to) => format!("redirect:{to}"),
        Outcome::Page(entry) => format!("page:{}", entry.path),
    }
}

// =============================================================
// Scenarios from the access matrix
// =============================================================

#[test]
fn home_renders_for_signed_out_visitors() {
    let outcome = dispatch(app_routes(), "/", &SessionState::Unauthenticated);
    assert_eq!(fingerprint(&outcome), "page:/");
}

#[test]
fn dashboard_awaits_while_session_resolves() {
    let outcome = dispatch(app_routes(), "/dashboard", &SessionState::Resolving);
    assert_eq!(fingerprint(&outcome), "await");
}

#[test]
fn dashboard_redirects_signed_out_visitors_to_login() {
    let outcome = dispatch(app_routes(), "/dashboard", &SessionState::Unauthenticated);
    assert_eq!(fingerprint(&outcome), "redirect:/login");
}

#[test]
fn dashboard_renders_for_signed_in_users() {
    let outcome = dispatch(app_routes(), "/dashboard", &authenticated());
    assert_eq!(fingerprint(&outcome), "page:/dashboard");
}

#[test]
fn unknown_path_falls_back_to_not_found() {
    let signed_in = dispatch(app_routes(), "/unknown-path", &authenticated());
    let signed_out = dispatch(app_routes(), "/unknown-path", &SessionState::Unauthenticated);
    assert_eq!(fingerprint(&signed_in), "page:*");
    assert_eq!(fingerprint(&signed_out), "page:*");
}

// =============================================================
// Resolving gates every path, fallback included
// =============================================================

#[test]
fn no_page_is_selected_while_resolving() {
    for path in ["/", "/login", "/pricing", "/dashboard", "/profile", "/nope"] {
        let outcome = dispatch(app_routes(), path, &SessionState::Resolving);
        assert_eq!(fingerprint(&outcome), "await", "path {path}");
    }
}

// =============================================================
// Determinism across repeated dispatches
// =============================================================

#[test]
fn repeated_dispatch_with_unchanged_inputs_is_identical() {
    for (path, session) in [
        ("/", SessionState::Unauthenticated),
        ("/dashboard", SessionState::Resolving),
        ("/dashboard", SessionState::Unauthenticated),
        ("/profile", authenticated()),
        ("/unknown-path", authenticated()),
    ] {
        let first = dispatch(app_routes(), path, &session);
        let second = dispatch(app_routes(), path, &session);
        assert_eq!(fingerprint(&first), fingerprint(&second), "path {path}");
    }
}

// =============================================================
// Profile mirrors dashboard gating
// =============================================================

#[test]
fn profile_is_gated_like_dashboard() {
    assert_eq!(
        fingerprint(&dispatch(app_routes(), "/profile", &SessionState::Unauthenticated)),
        "redirect:/login"
    );
    assert_eq!(
        fingerprint(&dispatch(app_routes(), "/profile", &authenticated())),
        "page:/profile"
    );
}
