//! reqwest-backed [`DataSource`] implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::types::{Operation, UserFilter};

use super::dto::{UserGroupOperationRoleDto, UserOperationRoleDto};
use super::{
    CreateOperationInput, DataSource, UpdateOperationInput, UserGroupPermissionUpdate,
    UserPermissionUpdate,
};

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[allow(dead_code)]
    error: bool,
    message: String,
    code: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct FavoriteBody {
    favorite: bool,
}

#[derive(Debug)]
pub struct HttpDataSource {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpDataSource {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        // Validate eagerly so a bad URL fails at construction, not per call
        Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn expect_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn expect_empty(resp: Response) -> Result<(), ClientError> {
        Self::check_status(resp).await.map(|_| ())
    }

    async fn check_status(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: Option<ApiErrorBody> = resp.json().await.ok();
        let (code, message) = match body {
            Some(ApiErrorBody { message, code, .. }) => (
                code.unwrap_or_else(|| status.as_str().to_string()),
                message,
            ),
            None => (
                status.as_str().to_string(),
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            ),
        };
        tracing::debug!(%status, code, "backend request failed: {}", message);
        Err(match (code.as_str(), status) {
            ("SLUG_TAKEN", _) | (_, StatusCode::CONFLICT) => ClientError::SlugTaken(message),
            (_, StatusCode::NOT_FOUND) => ClientError::NotFound(message),
            (_, StatusCode::UNAUTHORIZED) | (_, StatusCode::FORBIDDEN) => {
                ClientError::Unauthorized(message)
            }
            _ => ClientError::Api { code, message },
        })
    }

    fn name_query(filter: &UserFilter) -> Vec<(&'static str, String)> {
        match &filter.name {
            Some(name) => vec![("name", name.clone())],
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn create_operation(
        &self,
        input: CreateOperationInput,
    ) -> Result<Operation, ClientError> {
        let url = self.endpoint("api/operations");
        tracing::debug!(slug = %input.slug, "creating operation");
        let resp = self.authorize(self.http.post(&url)).json(&input).send().await?;
        Self::expect_json(resp).await
    }

    async fn delete_operation(&self, operation_slug: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("api/operations/{}", operation_slug));
        let resp = self.authorize(self.http.delete(&url)).send().await?;
        Self::expect_empty(resp).await
    }

    async fn list_operations(&self) -> Result<Vec<Operation>, ClientError> {
        let url = self.endpoint("api/operations");
        let resp = self.authorize(self.http.get(&url)).send().await?;
        Self::expect_json(resp).await
    }

    async fn admin_list_operations(&self) -> Result<Vec<Operation>, ClientError> {
        let url = self.endpoint("api/admin/operations");
        let resp = self.authorize(self.http.get(&url)).send().await?;
        Self::expect_json(resp).await
    }

    async fn read_operation(&self, operation_slug: &str) -> Result<Operation, ClientError> {
        let url = self.endpoint(&format!("api/operations/{}", operation_slug));
        let resp = self.authorize(self.http.get(&url)).send().await?;
        Self::expect_json(resp).await
    }

    async fn update_operation(
        &self,
        operation_slug: &str,
        input: UpdateOperationInput,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("api/operations/{}", operation_slug));
        let resp = self.authorize(self.http.put(&url)).json(&input).send().await?;
        Self::expect_empty(resp).await
    }

    async fn list_user_permissions(
        &self,
        operation_slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserOperationRoleDto>, ClientError> {
        let url = self.endpoint(&format!("api/operations/{}/users", operation_slug));
        let resp = self
            .authorize(self.http.get(&url))
            .query(&Self::name_query(filter))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    async fn list_user_group_permissions(
        &self,
        operation_slug: &str,
        filter: &UserFilter,
    ) -> Result<Vec<UserGroupOperationRoleDto>, ClientError> {
        let url = self.endpoint(&format!("api/operations/{}/usergroups", operation_slug));
        let resp = self
            .authorize(self.http.get(&url))
            .query(&Self::name_query(filter))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    async fn update_user_permissions(
        &self,
        operation_slug: &str,
        update: UserPermissionUpdate,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("api/operations/{}/users", operation_slug));
        let resp = self.authorize(self.http.patch(&url)).json(&update).send().await?;
        Self::expect_empty(resp).await
    }

    async fn update_user_group_permissions(
        &self,
        operation_slug: &str,
        update: UserGroupPermissionUpdate,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("api/operations/{}/usergroups", operation_slug));
        let resp = self.authorize(self.http.patch(&url)).json(&update).send().await?;
        Self::expect_empty(resp).await
    }

    async fn set_favorite(
        &self,
        operation_slug: &str,
        favorite: bool,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("api/operations/{}/favorite", operation_slug));
        let resp = self
            .authorize(self.http.post(&url))
            .json(&FavoriteBody { favorite })
            .send()
            .await?;
        Self::expect_empty(resp).await
    }
}
