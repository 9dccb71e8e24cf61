//! Mock authentication API for testing
//!
//! Provides a mock implementation of [`AuthApi`] so the auth store, guard and
//! router can be unit tested without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::AuthApi;
use super::models::{AccessToken, AuthStatus, UpdateUserRequest, User};
use crate::error::{ApiError, Result};

/// Mock auth API for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAuthApi::new()
///     .with_credentials("alice", "secret")
///     .await
///     .with_user(MockAuthApi::user("alice"))
///     .await;
///
/// let token = mock.login("alice", "secret").await?;
/// assert_eq!(token.access_token, "mock-token");
/// ```
pub struct MockAuthApi {
    /// Accepted username/password pair. Any pair is accepted when unset.
    credentials: Arc<Mutex<Option<(String, String)>>>,
    /// Token to return from login
    token: Arc<Mutex<AccessToken>>,
    /// User to return from get_me/update_me/register
    user: Arc<Mutex<Option<User>>>,
    /// Status to return from get_auth_status
    status: Arc<Mutex<AuthStatus>>,
    /// Error to return on the next call - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Errors keyed by operation name - each consumed on first use
    errors_for: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self {
            credentials: Arc::new(Mutex::new(None)),
            token: Arc::new(Mutex::new(AccessToken {
                access_token: "mock-token".to_string(),
                token_type: "bearer".to_string(),
            })),
            user: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(AuthStatus {
                has_users: true,
                user_count: 1,
            })),
            error: Arc::new(Mutex::new(None)),
            errors_for: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub get_me: usize,
    pub update_me: usize,
    pub get_auth_status: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login + self.register + self.get_me + self.update_me + self.get_auth_status
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "login", "update_me")
    pub method: String,
    /// Username, if the call carried one
    pub username: Option<String>,
    /// Email, if the call carried one
    pub email: Option<String>,
}

impl MockAuthApi {
    /// Create a new mock with default responses: one account exists, any
    /// credentials log in, and no user is known to `/auth/me`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A plausible user record for tests.
    pub fn user(username: &str) -> User {
        User {
            id: format!("user-{}", username),
            username: username.to_string(),
            email: None,
            is_active: true,
            created_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    /// Only accept this username/password pair at login.
    pub async fn with_credentials(self, username: &str, password: &str) -> Self {
        *self.credentials.lock().await = Some((username.to_string(), password.to_string()));
        self
    }

    /// Configure the token returned from login.
    pub async fn with_token(self, token: &str) -> Self {
        self.token.lock().await.access_token = token.to_string();
        self
    }

    /// Configure the user returned from get_me.
    pub async fn with_user(self, user: User) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure the status returned from get_auth_status.
    pub async fn with_status(self, status: AuthStatus) -> Self {
        *self.status.lock().await = status;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure an error for the next call of one operation only.
    pub async fn with_error_for(self, method: &'static str, error: ApiError) -> Self {
        self.errors_for.lock().await.insert(method, error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self, method: &'static str) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        if let Some(e) = self.errors_for.lock().await.remove(method) {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request(&self, method: &str, username: Option<&str>, email: Option<&str>) {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            username: username.map(str::to_string),
            email: email.map(str::to_string),
        });
    }

    async fn current_user(&self) -> Result<User> {
        self.user.lock().await.clone().ok_or_else(|| {
            ApiError::Unauthorized {
                detail: Some("Could not validate credentials".to_string()),
            }
            .into()
        })
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        self.capture_request("login", Some(username), None).await;
        self.call_count.lock().await.login += 1;
        self.check_error("login").await?;

        if let Some((expected_user, expected_password)) = &*self.credentials.lock().await {
            if expected_user != username || expected_password != password {
                return Err(ApiError::Unauthorized {
                    detail: Some("Incorrect username or password".to_string()),
                }
                .into());
            }
        }

        Ok(self.token.lock().await.clone())
    }

    async fn register(
        &self,
        username: &str,
        _password: &str,
        email: Option<&str>,
    ) -> Result<User> {
        self.capture_request("register", Some(username), email).await;
        self.call_count.lock().await.register += 1;
        self.check_error("register").await?;

        let mut user = Self::user(username);
        user.email = email.map(str::to_string);
        Ok(user)
    }

    async fn get_me(&self) -> Result<User> {
        self.capture_request("get_me", None, None).await;
        self.call_count.lock().await.get_me += 1;
        self.check_error("get_me").await?;

        self.current_user().await
    }

    async fn update_me(&self, update: &UpdateUserRequest) -> Result<User> {
        self.capture_request("update_me", None, update.email.as_deref())
            .await;
        self.call_count.lock().await.update_me += 1;
        self.check_error("update_me").await?;

        let mut user = self.current_user().await?;
        if let Some(email) = &update.email {
            user.email = Some(email.clone());
        }
        *self.user.lock().await = Some(user.clone());
        Ok(user)
    }

    async fn get_auth_status(&self) -> Result<AuthStatus> {
        self.capture_request("get_auth_status", None, None).await;
        self.call_count.lock().await.get_auth_status += 1;
        self.check_error("get_auth_status").await?;

        Ok(*self.status.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_defaults() {
        let mock = MockAuthApi::new();

        let token = mock.login("anyone", "anything").await.unwrap();
        assert_eq!(token.access_token, "mock-token");
        assert!(mock.get_auth_status().await.unwrap().has_users);
        assert!(mock.get_me().await.unwrap_err().detail().is_some());
    }

    #[tokio::test]
    async fn test_mock_rejects_wrong_credentials() {
        let mock = MockAuthApi::new().with_credentials("alice", "secret").await;

        assert!(mock.login("alice", "wrong").await.is_err());
        assert!(mock.login("alice", "secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_error_consumed_after_one_use() {
        let mock = MockAuthApi::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.get_auth_status().await.is_err());
        assert!(mock.get_auth_status().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_error_for_targets_one_operation() {
        let mock = MockAuthApi::new()
            .with_user(MockAuthApi::user("alice"))
            .await
            .with_error_for("get_me", ApiError::Unauthorized { detail: None })
            .await;

        assert!(mock.login("alice", "pw").await.is_ok());
        assert!(mock.get_me().await.is_err());
        assert!(mock.get_me().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_tracks_calls() {
        let mock = MockAuthApi::new()
            .with_user(MockAuthApi::user("alice"))
            .await;

        mock.register("bob", "pw", Some("bob@example.com")).await.unwrap();
        mock.update_me(&UpdateUserRequest::email("a@example.com"))
            .await
            .unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.register, 1);
        assert_eq!(counts.update_me, 1);
        assert_eq!(counts.total(), 2);

        let requests = mock.captured_requests().await;
        assert_eq!(requests[0].email.as_deref(), Some("bob@example.com"));
        assert_eq!(requests[1].method, "update_me");
        assert_eq!(
            mock.get_me().await.unwrap().email.as_deref(),
            Some("a@example.com")
        );
    }
}
