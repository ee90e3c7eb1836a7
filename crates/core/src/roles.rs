//! Well-known role names and the role sets enforced by the scenario routes.
//!
//! Role names travel inside the JWT `role` claim as lowercase strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_READONLY: &str = "readonly";
pub const ROLE_OPERATOR: &str = "operator";
pub const ROLE_ADMIN: &str = "admin";

/// A role that may appear in an allowed-role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowedRole {
    Readonly,
    Operator,
    Admin,
}

/// Roles permitted on read-only routes.
pub const READ_ROLES: &[AllowedRole] = &[
    AllowedRole::Readonly,
    AllowedRole::Operator,
    AllowedRole::Admin,
];

/// Roles permitted on routes that create, update or delete.
pub const WRITE_ROLES: &[AllowedRole] = &[AllowedRole::Operator, AllowedRole::Admin];

impl AllowedRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AllowedRole::Readonly => ROLE_READONLY,
            AllowedRole::Operator => ROLE_OPERATOR,
            AllowedRole::Admin => ROLE_ADMIN,
        }
    }
}

impl fmt::Display for AllowedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role claim does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for AllowedRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_READONLY => Ok(AllowedRole::Readonly),
            ROLE_OPERATOR => Ok(AllowedRole::Operator),
            ROLE_ADMIN => Ok(AllowedRole::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Whether `role` (as carried in a token) is a member of `allowed`.
///
/// Unknown role names are never allowed.
pub fn is_allowed(role: &str, allowed: &[AllowedRole]) -> bool {
    role.parse::<AllowedRole>()
        .map(|r| allowed.contains(&r))
        .unwrap_or(false)
}

/// Comma-separated role names, used in 403 messages.
pub fn describe(allowed: &[AllowedRole]) -> String {
    allowed
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
