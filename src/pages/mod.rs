//! Page components dispatched by the route table.
//!
//! Each page is a no-argument render unit; routing treats them as opaque
//! and none of them fetch data.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod profile;
