//! User domain model and role.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. String-valued enum: `admin` | `user`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Parse a role string. Accepts exactly `admin` or `user`.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }

    /// Admin gate: an equality check against the required role.
    pub fn authorize(&self, required: UserRole) -> bool {
        *self == required
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        };
        f.write_str(s)
    }
}

/// A user account.
///
/// Column layout matches the legacy store:
/// `users(username TEXT PRIMARY KEY, password TEXT, role TEXT)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}
