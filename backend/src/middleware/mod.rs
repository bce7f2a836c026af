//! General-purpose middleware for the gateway.
//!
//! Cookie plumbing shared by the access gateway and the logout route, request
//! path canonicalization, and the HTTP trace layer applied to the whole router.

pub mod cookies;
pub mod path;

use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
