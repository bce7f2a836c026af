//! Core `credentials` crate for verifying roomgate session credentials.
//!
//! This crate defines the `CredentialVerifier` trait, which the access gateway
//! calls once per protected request, and provides the concrete HMAC JWT
//! implementation used in production.

pub mod errors;
pub mod jwt;
pub mod models;

pub use errors::CredentialError;
pub use jwt::JwtVerifier;
pub use models::{Role, SessionClaims};

/// Checks a raw token's signature and expiry and returns its claims.
///
/// Implementations must be pure and synchronous: no I/O, no shared mutable
/// state. The gateway holds one behind an `Arc` for the life of the process.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<SessionClaims, CredentialError>;
}
