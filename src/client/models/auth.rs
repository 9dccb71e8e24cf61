//! Authentication models

use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Registration request body. `email` is sent as `null` when absent.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: Option<&'a str>,
}

/// Access token issued by `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    /// Opaque bearer token
    pub access_token: String,

    /// Token type, always "bearer"
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Whether any accounts exist, used to choose between login and first-run registration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthStatus {
    pub has_users: bool,
    pub user_count: u64,
}

impl AuthStatus {
    /// Fallback used when the status check itself fails: assume no accounts.
    pub const NO_ACCOUNTS: AuthStatus = AuthStatus {
        has_users: false,
        user_count: 0,
    };
}
