//! Module for forwarding accepted requests to the page server.

pub mod handlers;
pub mod routes;
