#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routing::table::{Access, RouteEntry};
use crate::state::session::SessionState;

/// Where denied protected-route attempts are sent.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of the access check for one route under one session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The route's page may render.
    Render,
    /// Navigate to the given path instead of rendering.
    Redirect(&'static str),
    /// The session has not resolved; show the loading placeholder.
    AwaitSession,
}

/// Decide whether `route` may render under `session`.
///
/// Total over the session-state x access-tag space, deterministic, and
/// side-effect free. While the session is resolving nothing renders, public
/// routes included: painting any page before the identity provider answers
/// risks a flash of chrome the user is not entitled to see.
pub fn authorize(route: &RouteEntry, session: &SessionState) -> Decision {
    match (session, route.access) {
        (SessionState::Resolving, _) => Decision::AwaitSession,
        (_, Access::Public) | (SessionState::Authenticated(_), Access::Protected) => {
            Decision::Render
        }
        (SessionState::Unauthenticated, Access::Protected) => Decision::Redirect(LOGIN_PATH),
    }
}
