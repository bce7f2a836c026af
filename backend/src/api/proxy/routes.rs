//! Defines the catch-all route that forwards to the page server.
//!
//! Registered as the router fallback so that any path without a local handler,
//! protected or not, ends up upstream once the gateway has let it through.

use axum::Router;

use super::handlers::forward;
use crate::state::AppState;

pub fn proxy_router() -> Router<AppState> {
    Router::new().fallback(forward)
}
