//! Wire-format records as the backend serializes them.
//!
//! Permission listings come back in a nested shape that the domain layer
//! flattens through [`convert`](super::convert); operations themselves share
//! their wire shape with [`Operation`](crate::types::Operation) and need no DTO.

use serde::{Deserialize, Serialize};

use crate::types::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUserDto {
    pub slug: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOperationRoleDto {
    pub user: OperationUserDto,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUserGroupDto {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupOperationRoleDto {
    pub user_group: OperationUserGroupDto,
    pub role: UserRole,
}
