use std::sync::Arc;

use credentials::JwtVerifier;

use crate::{
    auth::AccessGateway, config::Config, errors::AppError, services::UpstreamClient,
};

/// Shared, read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<AccessGateway>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let verifier =
            JwtVerifier::from_secret(config.secret.expose()).with_leeway(config.leeway_secs);
        let upstream = UpstreamClient::new(config.upstream_url.clone(), config.max_body_bytes)?;

        Ok(Self {
            gateway: Arc::new(AccessGateway::new(Arc::new(verifier))),
            upstream: Arc::new(upstream),
        })
    }
}
