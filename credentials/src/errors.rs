//! Custom error types specific to the `credentials` crate.
//!
//! Every way a session credential can fail to authenticate a request maps to
//! exactly one variant here, so callers branch with an exhaustive `match`
//! instead of inspecting error strings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// No `auth_token` cookie, or an empty one.
    #[error("missing token")]
    MissingCredential,

    /// The token was not signed with the configured secret.
    #[error("token signature does not match the configured secret")]
    SignatureMismatch,

    /// Expired, structurally invalid, wrong algorithm, or missing a required claim.
    #[error("invalid or expired token: {0}")]
    ExpiredOrMalformed(String),
}

impl CredentialError {
    /// Only a signature mismatch marks the stored cookie as poisoned.
    pub fn clears_cookie(&self) -> bool {
        matches!(self, CredentialError::SignatureMismatch)
    }
}
