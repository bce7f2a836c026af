//! Route table for the access gateway, plus the session routes it serves itself.
//!
//! [`ProtectedRoutes`] decides which paths the gateway evaluates at all.
//! [`session_router`] exposes `/logout`, which is deliberately unprotected.

use axum::{routing::get, Router};

use super::handlers::logout;

/// Areas of the site that require a session, keyed by path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Admin,
    Tenants,
    Landlords,
    RoleSelection,
    Api,
}

impl Area {
    /// Areas reserved for non-admin users.
    pub fn is_member_area(&self) -> bool {
        matches!(self, Area::Tenants | Area::Landlords | Area::RoleSelection)
    }
}

#[derive(Debug, Clone)]
pub struct ProtectedRoutes {
    entries: Vec<(&'static str, Area)>,
}

impl Default for ProtectedRoutes {
    fn default() -> Self {
        Self {
            entries: vec![
                ("/admin", Area::Admin),
                ("/tenants", Area::Tenants),
                ("/landlords", Area::Landlords),
                ("/role", Area::RoleSelection),
                ("/api", Area::Api),
            ],
        }
    }
}

impl ProtectedRoutes {
    /// Prefixes are disjoint, so the first match is the only match.
    pub fn classify(&self, path: &str) -> Option<Area> {
        self.entries
            .iter()
            .find(|(prefix, _)| within(path, prefix))
            .map(|(_, area)| *area)
    }
}

/// `path` equals `prefix` or continues it with a new segment.
fn within(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn session_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/logout", get(logout).post(logout))
}
