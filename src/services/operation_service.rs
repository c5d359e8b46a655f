//! Service layer over the backend data source for operation management.
//!
//! Each method is a stateless request/response call: validate or shape the
//! input, delegate to the injected [`DataSource`], shape the result. The one
//! piece of real logic lives in [`OperationService::create_operation`]: slug
//! derivation and a single bounded retry when the derived slug is taken.

use chrono::Utc;

use crate::client::convert::{user_group_operation_role_from_dto, user_operation_role_from_dto};
use crate::client::{
    CreateOperationInput, DataSource, UpdateOperationInput, UserGroupPermissionUpdate,
    UserPermissionUpdate,
};
use crate::error::{ClientError, ServiceError};
use crate::types::{Operation, UserFilter, UserGroupOperationRole, UserOperationRole, UserRole};

/// Derive a URL-safe slug from a display name: lowercase, every run of
/// non-alphanumeric characters collapsed to one `-`, no leading or trailing `-`.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

pub struct OperationService<D> {
    data_source: D,
}

impl<D: DataSource> OperationService<D> {
    pub fn new(data_source: D) -> Self {
        Self { data_source }
    }

    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    /// Create an operation named `name` under a slug derived from it.
    ///
    /// If the backend rejects the derived slug as taken, retries exactly once
    /// with a millisecond-timestamp suffix appended. Any other failure, or a
    /// failure of the retry itself, propagates unchanged.
    pub async fn create_operation(&self, name: &str) -> Result<Operation, ServiceError> {
        let slug = slugify(name);
        if slug.is_empty() {
            let message = if name.is_empty() {
                "Operation Name must not be empty"
            } else {
                "Operation Name must include letters or numbers"
            };
            return Err(ServiceError::Validation(message.to_string()));
        }

        match self
            .data_source
            .create_operation(CreateOperationInput {
                slug: slug.clone(),
                name: name.to_string(),
            })
            .await
        {
            Ok(operation) => Ok(operation),
            Err(ClientError::SlugTaken(_)) => {
                let retry_slug = format!("{}-{}", slug, Utc::now().timestamp_millis());
                tracing::debug!(slug = %retry_slug, "slug taken, retrying with disambiguated slug");
                let operation = self
                    .data_source
                    .create_operation(CreateOperationInput {
                        slug: retry_slug,
                        name: name.to_string(),
                    })
                    .await?;
                Ok(operation)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_operation(&self, slug: &str) -> Result<(), ServiceError> {
        Ok(self.data_source.delete_operation(slug).await?)
    }

    /// Operations visible to the caller
    pub async fn get_operations(&self) -> Result<Vec<Operation>, ServiceError> {
        Ok(self.data_source.list_operations().await?)
    }

    /// Every operation, regardless of membership; requires admin on the backend
    pub async fn get_operations_for_admin(&self) -> Result<Vec<Operation>, ServiceError> {
        Ok(self.data_source.admin_list_operations().await?)
    }

    pub async fn get_operation(&self, slug: &str) -> Result<Operation, ServiceError> {
        Ok(self.data_source.read_operation(slug).await?)
    }

    /// Update the display name of an existing operation. The slug is fixed at
    /// creation and does not follow the name.
    pub async fn save_operation(&self, slug: &str, name: &str) -> Result<(), ServiceError> {
        Ok(self
            .data_source
            .update_operation(
                slug,
                UpdateOperationInput {
                    name: name.to_string(),
                },
            )
            .await?)
    }

    pub async fn get_user_permissions(
        &self,
        slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserOperationRole>, ServiceError> {
        let roles = self.data_source.list_user_permissions(slug, filter).await?;
        Ok(roles.into_iter().map(user_operation_role_from_dto).collect())
    }

    pub async fn get_user_group_permissions(
        &self,
        slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserGroupOperationRole>, ServiceError> {
        let roles = self
            .data_source
            .list_user_group_permissions(slug, filter)
            .await?;
        Ok(roles
            .into_iter()
            .map(user_group_operation_role_from_dto)
            .collect())
    }

    pub async fn set_user_permission(
        &self,
        operation_slug: &str,
        user_slug: &str,
        role: UserRole,
    ) -> Result<(), ServiceError> {
        Ok(self
            .data_source
            .update_user_permissions(
                operation_slug,
                UserPermissionUpdate {
                    user_slug: user_slug.to_string(),
                    role,
                },
            )
            .await?)
    }

    pub async fn set_user_group_permission(
        &self,
        operation_slug: &str,
        user_group_slug: &str,
        role: UserRole,
    ) -> Result<(), ServiceError> {
        Ok(self
            .data_source
            .update_user_group_permissions(
                operation_slug,
                UserGroupPermissionUpdate {
                    user_group_slug: user_group_slug.to_string(),
                    role,
                },
            )
            .await?)
    }

    pub async fn set_favorite(&self, slug: &str, favorite: bool) -> Result<(), ServiceError> {
        Ok(self.data_source.set_favorite(slug, favorite).await?)
    }
}
