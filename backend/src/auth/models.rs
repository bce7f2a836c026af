//! Data structures produced by the access gateway.
//!
//! A [`Disposition`] is the complete answer for one request. The middleware
//! turns it into a response; nothing downstream needs to know why.

use serde::{Deserialize, Serialize};

/// Landing page for unauthenticated or generically invalid sessions.
pub const HOME_PATH: &str = "/";
/// Where admins land when they wander into tenant/landlord areas.
pub const ADMIN_LANDING_PATH: &str = "/admin/reports";
/// Role selection page for non-admins that hit `/admin`.
pub const ROLE_SELECTION_PATH: &str = "/role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Forward,
    Redirect(&'static str),
    Reject(RejectReason),
    RedirectAndClearCookie(&'static str),
}

impl Disposition {
    pub fn label(&self) -> &'static str {
        match self {
            Disposition::Forward => "forward",
            Disposition::Redirect(_) => "redirect",
            Disposition::Reject(_) => "reject",
            Disposition::RedirectAndClearCookie(_) => "redirect_clear_cookie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingToken,
    InvalidOrExpired,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::MissingToken => "missing token",
            RejectReason::InvalidOrExpired => "invalid or expired token",
        }
    }
}

/// JSON body for 401 responses on API paths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RejectBody {
    pub success: bool,
    pub message: String,
}

impl From<RejectReason> for RejectBody {
    fn from(reason: RejectReason) -> Self {
        Self {
            success: false,
            message: reason.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_body_shape() {
        let body = serde_json::to_value(RejectBody::from(RejectReason::MissingToken)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "missing token" })
        );

        let body = serde_json::to_value(RejectBody::from(RejectReason::InvalidOrExpired)).unwrap();
        assert_eq!(body["message"], "invalid or expired token");
    }
}
