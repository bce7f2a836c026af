//! Client for the page server that sits behind the gateway.
//!
//! Requests the gateway lets through are replayed against the configured
//! upstream with hop-by-hop headers removed. Upstream redirects are relayed to
//! the browser rather than followed. Response bodies are streamed through
//! without buffering.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderMap},
    response::Response,
};
use reqwest::{redirect::Policy, Client, Url};
use tracing::debug;

use crate::errors::AppError;
use crate::middleware::path::ensure_canonical;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base: Url,
    max_body_bytes: usize,
}

impl UpstreamClient {
    pub fn new(base: Url, max_body_bytes: usize) -> Result<Self, AppError> {
        let http = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self {
            http,
            base,
            max_body_bytes,
        })
    }

    pub fn target_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path_and_query)
    }

    pub async fn forward(&self, request: Request) -> Result<Response, AppError> {
        let (parts, body) = request.into_parts();
        ensure_canonical(parts.uri.path())?;
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = self.target_url(path_and_query);

        let body = to_bytes(body, self.max_body_bytes)
            .await
            .map_err(|err| AppError::Body(err.to_string()))?;

        let mut headers = parts.headers;
        strip_hop_by_hop(&mut headers);
        headers.remove(header::HOST);
        headers.remove(header::CONTENT_LENGTH);

        debug!(method = %parts.method, %url, "forwarding upstream");
        let upstream = self
            .http
            .request(parts.method, url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        strip_hop_by_hop(&mut headers);
        headers.remove(header::CONTENT_LENGTH);

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}
