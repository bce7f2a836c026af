//! Central module for application-wide configuration settings.
//!
//! Everything is read once at startup into a [`Config`] value that is then
//! passed down explicitly. Nothing in the request path reads the environment.

use std::{env, fmt, fs::read_to_string, net::SocketAddr, str::FromStr};

use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:3001";
const DEFAULT_LEEWAY_SECS: &str = "0";
const DEFAULT_MAX_BODY_BYTES: &str = "10485760";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("cannot read secret file {path}: {source}")]
    SecretFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("signing secret is empty")]
    EmptySecret,
}

/// HMAC key material. Never printed.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self(bytes))
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub upstream_url: Url,
    pub secret: SigningSecret,
    pub leeway_secs: u64,
    pub max_body_bytes: usize,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            bind_addr: parse_or_default(&lookup, "GATEWAY_BIND_ADDR", DEFAULT_BIND_ADDR)?,
            upstream_url: parse_or_default(&lookup, "GATEWAY_UPSTREAM_URL", DEFAULT_UPSTREAM_URL)?,
            secret: load_secret(&lookup)?,
            leeway_secs: parse_or_default(&lookup, "AUTH_LEEWAY_SECS", DEFAULT_LEEWAY_SECS)?,
            max_body_bytes: parse_or_default(
                &lookup,
                "GATEWAY_MAX_BODY_BYTES",
                DEFAULT_MAX_BODY_BYTES,
            )?,
        };

        info!(
            bind_addr = %config.bind_addr,
            upstream = %config.upstream_url,
            leeway_secs = config.leeway_secs,
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}

/// `AUTH_SECRET` wins over `AUTH_SECRET_FILE`; file contents are trimmed.
fn load_secret<F>(lookup: &F) -> Result<SigningSecret, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secret) = lookup("AUTH_SECRET") {
        return SigningSecret::new(secret);
    }

    let path = lookup("AUTH_SECRET_FILE").ok_or(ConfigError::Missing("AUTH_SECRET"))?;
    let contents = read_to_string(&path).map_err(|source| ConfigError::SecretFile {
        path: path.clone(),
        source,
    })?;
    SigningSecret::new(contents.trim())
}
