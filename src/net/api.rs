//! REST helper for the identity backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since the session cookie only exists in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A `401` is a definitive "not signed in" and maps to `Ok(None)`. Every
//! other failure, transport errors included, is the provider itself
//! misbehaving and surfaces as `Err` so the caller can apply its
//! resolution policy instead of guessing.

#![allow(clippy::unused_async)]

use super::types::User;

/// Fetch the currently signed-in user from `GET /api/auth/me`.
///
/// Returns `Ok(Some(user))` when signed in, `Ok(None)` when the backend
/// answers that nobody is, and `Err` when the check itself failed.
///
/// # Errors
///
/// Returns the transport or decode failure as a display string.
pub async fn fetch_current_user() -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(format!("session endpoint returned {}", resp.status()));
        }
        resp.json::<User>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}
