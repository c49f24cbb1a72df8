#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::sync::LazyLock;

use leptos::prelude::*;

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    pricing::PricingPage, profile::ProfilePage,
};

/// A no-argument page render unit. The dispatcher treats pages as opaque;
/// this is the whole contract between routing and page content.
pub type PageFn = fn() -> AnyView;

/// Whether a route requires a signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// One row of the route table: a static literal path, its access tag, and
/// the page that serves it.
#[derive(Clone, Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
    pub page: PageFn,
}

/// Error from [`RouteTable::new`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two entries declare the same path. Shadowing one of them silently
    /// would make dispatch order-dependent, so construction fails instead.
    #[error("duplicate route declaration for path {path:?}")]
    DuplicatePath { path: &'static str },
}

/// Static path-to-page mapping plus a fallback entry for unmatched paths.
///
/// Constructed once at startup and never mutated. Lookup is a pure
/// function; the table holds no session knowledge.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: RouteEntry,
}

impl RouteTable {
    /// Build a table, rejecting duplicate path declarations.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError::DuplicatePath`] naming the first path
    /// declared more than once; no partial table is produced.
    pub fn new(entries: Vec<RouteEntry>, fallback: RouteEntry) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[i + 1..].iter().any(|other| other.path == entry.path) {
                return Err(RouteTableError::DuplicatePath { path: entry.path });
            }
        }
        Ok(Self { entries, fallback })
    }

    /// Look up the entry whose literal path matches exactly.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// The entry used when no declared path matches.
    pub fn fallback(&self) -> &RouteEntry {
        &self.fallback
    }

    /// All declared entries, in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

/// The application route table.
///
/// Declared here, in one place, instead of being derived from rendered
/// component structure. Construction runs once; a duplicate declaration
/// aborts startup before anything renders.
pub fn app_routes() -> &'static RouteTable {
    static ROUTES: LazyLock<RouteTable> = LazyLock::new(|| {
        RouteTable::new(
            vec![
                RouteEntry {
                    path: "/",
                    access: Access::Public,
                    page: || HomePage().into_any(),
                },
                RouteEntry {
                    path: "/login",
                    access: Access::Public,
                    page: || LoginPage().into_any(),
                },
                RouteEntry {
                    path: "/pricing",
                    access: Access::Public,
                    page: || PricingPage().into_any(),
                },
                RouteEntry {
                    path: "/dashboard",
                    access: Access::Protected,
                    page: || DashboardPage().into_any(),
                },
                RouteEntry {
                    path: "/profile",
                    access: Access::Protected,
                    page: || ProfilePage().into_any(),
                },
            ],
            RouteEntry {
                path: "*",
                access: Access::Public,
                page: || NotFoundPage().into_any(),
            },
        )
        .expect("application route table declares a duplicate path")
    });
    &ROUTES
}
