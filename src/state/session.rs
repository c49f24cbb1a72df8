#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication session state for the whole client.
///
/// The value starts as `Resolving` at mount and settles exactly once per
/// application lifetime, when the one-shot identity check completes. The
/// provider in [`crate::app`] owns the writable signal; every other
/// component sees a read-only view through [`use_session`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The identity check has not answered yet. Nothing may render.
    #[default]
    Resolving,
    /// The identity check confirmed a signed-in user.
    Authenticated(User),
    /// The identity check confirmed there is no signed-in user.
    Unauthenticated,
}

impl SessionState {
    /// Whether the identity check is still outstanding.
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    /// Whether a signed-in user is confirmed.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Resolving | Self::Unauthenticated => None,
        }
    }

    /// Map the identity-check result to a session state.
    ///
    /// `Ok(Some)` and `Ok(None)` are definitive answers. `Err` means the
    /// provider itself failed; what that settles to is a deployment choice,
    /// so it is driven by `policy` instead of being assumed here.
    pub fn settle(result: Result<Option<User>, String>, policy: ResolutionPolicy) -> Self {
        match result {
            Ok(Some(user)) => Self::Authenticated(user),
            Ok(None) => Self::Unauthenticated,
            Err(_) => match policy {
                ResolutionPolicy::SettleUnauthenticated => Self::Unauthenticated,
                ResolutionPolicy::RemainResolving => Self::Resolving,
            },
        }
    }
}

/// What the session settles to when the identity provider itself fails
/// (network error, bad gateway), as opposed to answering "not signed in".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Treat a failed check as signed out. Protected routes redirect to
    /// login instead of pinning every route on the loading placeholder.
    #[default]
    SettleUnauthenticated,
    /// Keep showing the loading placeholder. For deployments where the
    /// provider retries out-of-band and a late answer is expected.
    RemainResolving,
}

/// Read-only access to the live session state.
///
/// Must be called under the provider set up in [`crate::app::App`].
pub fn use_session() -> ReadSignal<SessionState> {
    expect_context::<ReadSignal<SessionState>>()
}

/// Run the one-shot identity check and settle the session signal.
///
/// Client-side (hydrate) only; on the server the session stays `Resolving`
/// and the dispatcher renders the placeholder. The signal is written here
/// and nowhere else.
pub fn spawn_session_resolver(session: RwSignal<SessionState>, policy: ResolutionPolicy) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_current_user().await;
            if let Err(err) = &result {
                log::warn!("identity check failed: {err}");
            }
            session.set(SessionState::settle(result, policy));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, policy);
    }
}
