//! Wire types shared with the identity backend.

use serde::{Deserialize, Serialize};

/// Signed-in user identity as returned by `GET /api/auth/me`.
///
/// `id` is the identity provider's opaque subject identifier and is never
/// parsed client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
