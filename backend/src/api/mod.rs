//! Central module for request handling behind the access gateway.
//!
//! Page and API rendering happen elsewhere; everything the gateway forwards is
//! handed to the proxy, which replays it against the page server.

pub mod proxy;
