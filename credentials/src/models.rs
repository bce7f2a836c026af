//! Session credential payload and the role it carries.
//!
//! The issuing auth server only distinguishes `"admin"` from `"user"`;
//! tenants and landlords both log in as `"user"`.

use serde::{Deserialize, Serialize};

/// Claims read from a verified `auth_token`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub exp: u64,
}

impl SessionClaims {
    pub fn role(&self) -> Role {
        Role::from_claim(self.role.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    /// Anything else, including a missing claim. Kept distinct so it can be
    /// logged, but route partitioning treats it exactly like `User`.
    Unrecognized(String),
}

impl Role {
    pub fn from_claim(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Role::Admin,
            Some("user") => Role::User,
            Some(other) => Role::Unrecognized(other.to_string()),
            None => Role::Unrecognized(String::new()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Unrecognized(raw) => raw,
        }
    }
}
