//! Session-gated route dispatch.
//!
//! DESIGN
//! ======
//! Routing is split into three small pieces so the decision logic stays
//! testable without a rendering environment:
//!
//! - [`table`]: the static declaration of which page serves which path and
//!   whether it requires a signed-in session. Built once, duplicate paths
//!   rejected at construction.
//! - [`guard`]: the pure access decision over (route, session state).
//! - [`dispatcher`]: the pure per-navigation outcome plus the component
//!   that applies it (placeholder, replacing redirect, or page render).

pub mod dispatcher;
pub mod guard;
pub mod table;

pub use dispatcher::RouteDispatcher;
