//! HMAC-signed JWT implementation of [`CredentialVerifier`].
//!
//! Wraps `jsonwebtoken` and folds its error kinds into the three-way
//! [`CredentialError`] taxonomy. The signature is checked before any claim,
//! so a forged token that is also expired still reports `SignatureMismatch`.

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use tracing::trace;

use crate::errors::CredentialError;
use crate::models::SessionClaims;
use crate::CredentialVerifier;

const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Verifier for tokens signed with `secret` under any HS* algorithm.
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Clock tolerance, in seconds, applied to `exp`.
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.validation.leeway = seconds;
        self
    }
}

impl CredentialVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, CredentialError> {
        if token.is_empty() {
            return Err(CredentialError::MissingCredential);
        }

        decode::<SessionClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                trace!(kind = ?err.kind(), "token rejected");
                match err.kind() {
                    ErrorKind::InvalidSignature => CredentialError::SignatureMismatch,
                    other => CredentialError::ExpiredOrMalformed(format!("{other:?}")),
                }
            })
    }
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
