//! Users manager, the load seam between presenters and the REST client.

use crate::api::UsersApiClient;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};

/// The operations presenters consume.
///
/// Each call completes with exactly one outcome. Tests substitute a scripted
/// implementation with immediate completions.
pub trait UsersGateway {
    async fn load_users_list(&self) -> Result<Vec<User>, ApiError>;
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError>;
    async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<User, ApiError>;
}

/// Production gateway: a stateless pass-through to [`UsersApiClient`].
#[derive(Debug, Clone)]
pub struct UsersManager {
    client: UsersApiClient,
}

impl UsersManager {
    pub fn new(client: UsersApiClient) -> Self {
        Self { client }
    }
}

impl UsersGateway for UsersManager {
    async fn load_users_list(&self) -> Result<Vec<User>, ApiError> {
        let users = self.client.list().await?;
        tracing::debug!("Loaded {} users", users.len());
        Ok(users)
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        let user = self.client.create(request).await?;
        tracing::debug!("Created user {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<User, ApiError> {
        let user = self.client.update(id, request).await?;
        tracing::debug!("Updated user {}", user.id);
        Ok(user)
    }
}
