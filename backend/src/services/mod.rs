//! Module for services the gateway talks to.
//!
//! The only outbound dependency is the page server that receives forwarded
//! requests once the access gateway has let them through.

pub mod upstream;

pub use upstream::UpstreamClient;
