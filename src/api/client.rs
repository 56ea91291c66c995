//! HTTP client for the users backend.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};

/// Client for the users REST API.
///
/// The backend exposes a conventional JSON CRUD contract:
/// `GET /users.json`, `POST /users.json`, `PATCH /users/{id}.json`.
#[derive(Debug, Clone)]
pub struct UsersApiClient {
    client: Client,
    base_url: String,
}

impl UsersApiClient {
    /// Create a new API client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.execute(self.request(Method::GET, "/users.json")).await
    }

    /// Create a user. The server assigns the id and returns the stored record.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.execute(self.request(Method::POST, "/users.json").json(request))
            .await
    }

    /// Partially update the user with the given id.
    pub async fn update(&self, id: i64, request: &UpdateUserRequest) -> Result<User, ApiError> {
        let path = format!("/users/{}.json", id);
        self.execute(self.request(Method::PATCH, &path).json(request))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send the request and decode a JSON body, mapping non-2xx statuses to
    /// [`ApiError::Http`].
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Backend returned status {}", status);
            return Err(ApiError::Http(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
