//! Backend client boundary: the [`DataSource`] trait, wire DTOs and the
//! reqwest-backed implementation.

pub mod convert;
pub mod dto;
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::types::{Operation, UserFilter, UserRole};
use dto::{UserGroupOperationRoleDto, UserOperationRoleDto};

pub use http::HttpDataSource;

/// Request body for creating an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperationInput {
    pub slug: String,
    pub name: String,
}

/// Request body for renaming an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOperationInput {
    pub name: String,
}

/// Upsert of a single user's role on an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionUpdate {
    pub user_slug: String,
    pub role: UserRole,
}

/// Upsert of a single user group's role on an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupPermissionUpdate {
    pub user_group_slug: String,
    pub role: UserRole,
}

/// Abstract backend client performing the actual network calls.
///
/// Every method is a single request/response round trip; implementations hold
/// no per-call state. The service layer owns an implementation by injection so
/// tests can substitute a double.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn create_operation(
        &self,
        input: CreateOperationInput,
    ) -> Result<Operation, ClientError>;

    async fn delete_operation(&self, operation_slug: &str) -> Result<(), ClientError>;

    async fn list_operations(&self) -> Result<Vec<Operation>, ClientError>;

    /// Full administrative listing; elevated scope is enforced server-side
    async fn admin_list_operations(&self) -> Result<Vec<Operation>, ClientError>;

    async fn read_operation(&self, operation_slug: &str) -> Result<Operation, ClientError>;

    async fn update_operation(
        &self,
        operation_slug: &str,
        input: UpdateOperationInput,
    ) -> Result<(), ClientError>;

    async fn list_user_permissions(
        &self,
        operation_slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserOperationRoleDto>, ClientError>;

    async fn list_user_group_permissions(
        &self,
        operation_slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserGroupOperationRoleDto>, ClientError>;

    async fn update_user_permissions(
        &self,
        operation_slug: &str,
        update: UserPermissionUpdate,
    ) -> Result<(), ClientError>;

    async fn update_user_group_permissions(
        &self,
        operation_slug: &str,
        update: UserGroupPermissionUpdate,
    ) -> Result<(), ClientError>;

    async fn set_favorite(&self, operation_slug: &str, favorite: bool)
        -> Result<(), ClientError>;
}
