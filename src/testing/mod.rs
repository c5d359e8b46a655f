//! Test doubles for the data-source boundary

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{
    CreateOperationInput, DataSource, UpdateOperationInput, UserGroupPermissionUpdate,
    UserPermissionUpdate,
};
use crate::client::dto::{UserGroupOperationRoleDto, UserOperationRoleDto};
use crate::error::ClientError;
use crate::types::{Operation, UserFilter};

/// Record of one call made against the mock, in arrival order
#[derive(Debug)]
pub enum Call {
    CreateOperation(CreateOperationInput),
    DeleteOperation(String),
    ListOperations,
    AdminListOperations,
    ReadOperation(String),
    UpdateOperation(String, UpdateOperationInput),
    ListUserPermissions(String, UserFilter),
    ListUserGroupPermissions(String, UserFilter),
    UpdateUserPermissions(String, UserPermissionUpdate),
    UpdateUserGroupPermissions(String, UserGroupPermissionUpdate),
    SetFavorite(String, bool),
}

/// Scripted [`DataSource`] double.
///
/// Create results are consumed from a queue so a test can script a conflict
/// followed by a success; listing methods return whatever was last set. Every
/// call is recorded for assertion.
#[derive(Default)]
pub struct MockDataSource {
    calls: Mutex<Vec<Call>>,
    create_results: Mutex<VecDeque<Result<Operation, ClientError>>>,
    operations: Mutex<Vec<Operation>>,
    user_permissions: Mutex<Vec<UserOperationRoleDto>>,
    user_group_permissions: Mutex<Vec<UserGroupOperationRoleDto>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_create_result(&self, result: Result<Operation, ClientError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn set_operations(&self, operations: Vec<Operation>) {
        *self.operations.lock().unwrap() = operations;
    }

    pub fn set_user_permissions(&self, roles: Vec<UserOperationRoleDto>) {
        *self.user_permissions.lock().unwrap() = roles;
    }

    pub fn set_user_group_permissions(&self, roles: Vec<UserGroupOperationRoleDto>) {
        *self.user_group_permissions.lock().unwrap() = roles;
    }

    /// Drain the recorded calls
    pub fn calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn create_operation(
        &self,
        input: CreateOperationInput,
    ) -> Result<Operation, ClientError> {
        self.record(Call::CreateOperation(input.clone()));
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(Operation {
                    slug: input.slug,
                    name: input.name,
                    num_users: 1,
                    favorite: false,
                })
            })
    }

    async fn delete_operation(&self, operation_slug: &str) -> Result<(), ClientError> {
        self.record(Call::DeleteOperation(operation_slug.to_string()));
        Ok(())
    }

    async fn list_operations(&self) -> Result<Vec<Operation>, ClientError> {
        self.record(Call::ListOperations);
        Ok(self.operations.lock().unwrap().clone())
    }

    async fn admin_list_operations(&self) -> Result<Vec<Operation>, ClientError> {
        self.record(Call::AdminListOperations);
        Ok(self.operations.lock().unwrap().clone())
    }

    async fn read_operation(&self, operation_slug: &str) -> Result<Operation, ClientError> {
        self.record(Call::ReadOperation(operation_slug.to_string()));
        self.operations
            .lock()
            .unwrap()
            .iter()
            .find(|op| op.slug == operation_slug)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("operation {}", operation_slug)))
    }

    async fn update_operation(
        &self,
        operation_slug: &str,
        input: UpdateOperationInput,
    ) -> Result<(), ClientError> {
        self.record(Call::UpdateOperation(operation_slug.to_string(), input));
        Ok(())
    }

    async fn list_user_permissions(
        &self,
        operation_slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserOperationRoleDto>, ClientError> {
        self.record(Call::ListUserPermissions(
            operation_slug.to_string(),
            filter.clone(),
        ));
        Ok(self.user_permissions.lock().unwrap().clone())
    }

    async fn list_user_group_permissions(
        &self,
        operation_slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserGroupOperationRoleDto>, ClientError> {
        self.record(Call::ListUserGroupPermissions(
            operation_slug.to_string(),
            filter.clone(),
        ));
        Ok(self.user_group_permissions.lock().unwrap().clone())
    }

    async fn update_user_permissions(
        &self,
        operation_slug: &str,
        update: UserPermissionUpdate,
    ) -> Result<(), ClientError> {
        self.record(Call::UpdateUserPermissions(
            operation_slug.to_string(),
            update,
        ));
        Ok(())
    }

    async fn update_user_group_permissions(
        &self,
        operation_slug: &str,
        update: UserGroupPermissionUpdate,
    ) -> Result<(), ClientError> {
        self.record(Call::UpdateUserGroupPermissions(
            operation_slug.to_string(),
            update,
        ));
        Ok(())
    }

    async fn set_favorite(
        &self,
        operation_slug: &str,
        favorite: bool,
    ) -> Result<(), ClientError> {
        self.record(Call::SetFavorite(operation_slug.to_string(), favorite));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_records_calls_in_order() {
        let ds = MockDataSource::new();
        ds.delete_operation("a").await.unwrap();
        ds.set_favorite("b", true).await.unwrap();

        let calls = ds.calls();
        assert!(matches!(&calls[0], Call::DeleteOperation(slug) if slug == "a"));
        assert!(matches!(&calls[1], Call::SetFavorite(slug, true) if slug == "b"));
    }

    #[tokio::test]
    async fn unscripted_create_echoes_the_input() {
        let ds = MockDataSource::new();
        let op = ds
            .create_operation(CreateOperationInput {
                slug: "echo".to_string(),
                name: "Echo".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(op.slug, "echo");
        assert_eq!(op.name, "Echo");
    }
}
