//! Fixed chrome around the dispatched page.

pub mod layout;
pub mod loading;
pub mod navbar;
