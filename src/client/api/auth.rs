//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, AuthStatus, UpdateUserRequest, User};
use crate::error::Result;

/// Authentication and identity operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access token (`POST /auth/login`)
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken>;

    /// Create an account (`POST /auth/register`). Does not log in.
    async fn register(&self, username: &str, password: &str, email: Option<&str>)
    -> Result<User>;

    /// Identity record for the current token (`GET /auth/me`)
    async fn get_me(&self) -> Result<User>;

    /// Update email or password of the current user (`PUT /auth/me`)
    async fn update_me(&self, update: &UpdateUserRequest) -> Result<User>;

    /// Whether any accounts exist (`GET /auth/status`)
    async fn get_auth_status(&self) -> Result<AuthStatus>;
}
