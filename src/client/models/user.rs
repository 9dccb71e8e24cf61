//! User models

use serde::{Deserialize, Serialize};

/// Identity record returned by `/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User ID
    pub id: String,

    /// Login name
    pub username: String,

    /// Email address (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the account is active
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Creation timestamp (ISO 8601 as sent by the server)
    #[serde(default)]
    pub created_at: String,
}

fn default_active() -> bool {
    true
}

/// Profile update for `PUT /auth/me`
///
/// Changing the password requires `current_password` alongside `new_password`;
/// the server enforces this and answers 400 otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UpdateUserRequest {
    /// Update only the email address
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Change the password
    pub fn password(current: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            current_password: Some(current.into()),
            new_password: Some(new.into()),
            ..Self::default()
        }
    }
}
