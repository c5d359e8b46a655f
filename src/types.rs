/// Shared domain types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An operation is the top-level workspace entity, identified by a unique
/// URL-safe slug derived from its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub num_users: u32,
    #[serde(default)]
    pub favorite: bool,
}

/// Permission level a user or user group holds within one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Write,
    Read,
    NoAccess,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Write => "write",
            UserRole::Read => "read",
            UserRole::NoAccess => "no_access",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "write" => Ok(UserRole::Write),
            "read" => Ok(UserRole::Read),
            "no_access" | "no-access" | "none" => Ok(UserRole::NoAccess),
            other => Err(format!(
                "unknown role '{}' (expected admin, write, read or no_access)",
                other
            )),
        }
    }
}

/// User identity as presented within a permission listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUser {
    pub slug: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUserGroup {
    pub slug: String,
    pub name: String,
}

/// A user's role on one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOperationRole {
    pub user: OperationUser,
    pub role: UserRole,
}

/// A user group's role on one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupOperationRole {
    pub user_group: OperationUserGroup,
    pub role: UserRole,
}

/// Optional name filter applied when listing permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    pub name: Option<String>,
}

impl UserFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
