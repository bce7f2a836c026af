//! Access control for the marketplace front end.
//!
//! This module provides the route table, the pure access decision, and the
//! axum middleware that enforces it, plus the logout route that clears the
//! session cookie.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::{AuthRejection, RoleMismatch};
pub use middleware::{access_gateway, protect};
pub use models::{Disposition, RejectBody, RejectReason};
pub use routes::{session_router, Area, ProtectedRoutes};
pub use service::AccessGateway;
