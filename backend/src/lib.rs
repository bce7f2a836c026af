//! roomgate: the session-authorization gateway in front of the roommate
//! marketplace pages.
//!
//! Every request passes through [`auth::access_gateway`]. Requests it lets
//! through are served locally (`/logout`) or forwarded to the page server.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::Router;

use api::proxy::routes::proxy_router;
use auth::{protect, session_router};
use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(session_router())
        .merge(proxy_router());

    protect(routes, state.gateway.clone())
        .layer(middleware::trace_layer())
        .with_state(state)
}
