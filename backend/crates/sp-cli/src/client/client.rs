use crate::{CliClientResult, ClientError};

use sp_config::ScimConfig;
use sp_core::{ListResponse, ScimErrorResponse, ScimUser, user_name_eq};

use std::time::Duration;

use log::{debug, error, info};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Media type for SCIM request and response bodies
pub const SCIM_CONTENT_TYPE: &str = "application/scim+json";

/// HTTP client for a SCIM 2.0 Users endpoint
pub struct Client {
    pub base_url: String,
    pub enterprise: String,
    users_endpoint: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Identity host URL (e.g., "https://api.github.com")
    /// * `enterprise` - Enterprise slug used in the Users endpoint path
    /// * `token` - Bearer token with SCIM scope
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: &str,
        enterprise: &str,
        token: &str,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let enterprise = enterprise.to_string();
        let users_endpoint = format!("{}/scim/v2/enterprises/{}/Users", base_url, enterprise);

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(SCIM_CONTENT_TYPE));

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url,
            enterprise,
            users_endpoint,
            client,
        })
    }

    /// Create a client from validated configuration
    pub fn from_config(config: &ScimConfig) -> CliClientResult<Self> {
        Self::new(
            config.url.trim(),
            config.enterprise.trim(),
            config.token.as_deref().unwrap_or_default(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn users_endpoint(&self) -> &str {
        &self.users_endpoint
    }

    /// Execute request and handle errors.
    ///
    /// Returns `None` for 204 and other empty success bodies.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> CliClientResult<Option<T>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Response status: {}", status);
            error!("Response body: {}", body);

            let message = serde_json::from_str::<ScimErrorResponse>(&body)
                .ok()
                .and_then(|e| e.summary())
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Unknown error")
                            .to_string()
                    } else {
                        body.clone()
                    }
                });

            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List users, optionally narrowed by a SCIM filter expression.
    ///
    /// Only the first page the server returns is read.
    pub async fn list_users(&self, filter: Option<&str>) -> CliClientResult<Vec<ScimUser>> {
        let mut req = self.client.get(&self.users_endpoint);
        if let Some(filter) = filter {
            req = req.query(&[("filter", filter)]);
        }

        let list: Option<ListResponse<ScimUser>> = self.execute(req).await?;
        Ok(list.map(ListResponse::into_resources).unwrap_or_default())
    }

    /// Get a user by userName
    pub async fn get_user(&self, user_name: &str) -> CliClientResult<Option<ScimUser>> {
        let filter = user_name_eq(user_name);
        let users = self.list_users(Some(&filter)).await?;
        Ok(users.into_iter().next())
    }

    /// Get a user by SCIM id
    pub async fn get_user_by_id(&self, id: &str) -> CliClientResult<ScimUser> {
        let req = self
            .client
            .get(format!("{}/{}", self.users_endpoint, id));

        self.execute(req)
            .await?
            .ok_or_else(|| ClientError::empty_body("get_user_by_id"))
    }

    /// Create a new user
    pub async fn create_user(&self, user: &ScimUser) -> CliClientResult<ScimUser> {
        info!("Creating user: {}", user.user_name);
        debug!("User data: {}", serde_json::to_string_pretty(user)?);
        debug!("SCIM endpoint: {}", self.users_endpoint);

        let body = serde_json::to_vec(user)?;
        let req = self
            .client
            .post(&self.users_endpoint)
            .header(CONTENT_TYPE, SCIM_CONTENT_TYPE)
            .body(body);

        self.execute(req)
            .await?
            .ok_or_else(|| ClientError::empty_body("create_user"))
    }
}
