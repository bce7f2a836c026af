//! Core decision logic of the access gateway.
//!
//! [`AccessGateway::evaluate`] is a pure function of the request path, the raw
//! `auth_token` value and the verifier fixed at startup. It performs at most one
//! signature check, never blocks and never fails: every outcome is a
//! [`Disposition`].

use std::sync::Arc;

use credentials::{CredentialError, CredentialVerifier, Role};
use tracing::{debug, warn};

use super::errors::RoleMismatch;
use super::models::{
    Disposition, RejectReason, ADMIN_LANDING_PATH, HOME_PATH, ROLE_SELECTION_PATH,
};
use super::routes::{Area, ProtectedRoutes};

pub struct AccessGateway {
    routes: ProtectedRoutes,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AccessGateway {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            routes: ProtectedRoutes::default(),
            verifier,
        }
    }

    pub fn evaluate(&self, path: &str, token: Option<&str>) -> Disposition {
        let Some(area) = self.routes.classify(path) else {
            return Disposition::Forward;
        };

        let disposition = match self.authenticate(token) {
            Ok(role) => match partition(area, &role) {
                Ok(()) => Disposition::Forward,
                Err(mismatch) => {
                    debug!(path, %mismatch, "role mismatch");
                    Disposition::Redirect(mismatch.redirect_to)
                }
            },
            Err(err) => on_failure(area, &err),
        };

        debug!(path, ?area, disposition = disposition.label(), "access decision");
        disposition
    }

    /// Verifies the token and returns its role. An empty token counts as missing.
    pub fn authenticate(&self, token: Option<&str>) -> Result<Role, CredentialError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(CredentialError::MissingCredential)?;

        let claims = self.verifier.verify(token)?;
        let role = claims.role();
        if let Role::Unrecognized(_) = &role {
            warn!(role = role.as_str(), sub = ?claims.sub, "unrecognized role, treating as user");
        }
        Ok(role)
    }
}

/// Coarse role partitioning. Anything that is not `Admin` is held to the
/// same rules as `User`.
pub fn partition(area: Area, role: &Role) -> Result<(), RoleMismatch> {
    let redirect_to = match (role.is_admin(), area) {
        (true, area) if area.is_member_area() => ADMIN_LANDING_PATH,
        (false, Area::Admin) => ROLE_SELECTION_PATH,
        _ => return Ok(()),
    };

    Err(RoleMismatch {
        role: role.clone(),
        area,
        redirect_to,
    })
}

fn on_failure(area: Area, err: &CredentialError) -> Disposition {
    match err {
        CredentialError::SignatureMismatch => {
            warn!("session cookie signature mismatch, clearing it");
            Disposition::RedirectAndClearCookie(HOME_PATH)
        }
        CredentialError::MissingCredential if area == Area::Api => {
            Disposition::Reject(RejectReason::MissingToken)
        }
        CredentialError::ExpiredOrMalformed(reason) if area == Area::Api => {
            debug!(%reason, "rejecting api request");
            Disposition::Reject(RejectReason::InvalidOrExpired)
        }
        CredentialError::MissingCredential | CredentialError::ExpiredOrMalformed(_) => {
            Disposition::Redirect(HOME_PATH)
        }
    }
}
