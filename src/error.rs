//! Error types for the HomeRegistry client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for HomeRegistry client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Server-supplied `detail` message, if this error came from an HTTP response carrying one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api(api) => api.detail(),
            _ => None,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication required: {}", .detail.as_deref().unwrap_or("session expired or invalid"))]
    Unauthorized { detail: Option<String> },

    #[error("Access denied: {}", .detail.as_deref().unwrap_or("permission denied"))]
    Forbidden { detail: Option<String> },

    #[error("Resource not found: {}", .detail.as_deref().unwrap_or("no details"))]
    NotFound { detail: Option<String> },

    #[error("Bad request ({status}): {}", .detail.as_deref().unwrap_or("no details"))]
    BadRequest { status: u16, detail: Option<String> },

    #[error("Server error ({status}): {}", .detail.as_deref().unwrap_or("no details"))]
    ServerError { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Classify a non-success status code.
    pub fn from_status(status: StatusCode, detail: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized { detail },
            StatusCode::FORBIDDEN => ApiError::Forbidden { detail },
            StatusCode::NOT_FOUND => ApiError::NotFound { detail },
            status if status.is_client_error() => ApiError::BadRequest {
                status: status.as_u16(),
                detail,
            },
            status if status.is_server_error() => ApiError::ServerError {
                status: status.as_u16(),
                detail,
            },
            status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        }
    }

    /// Server-supplied `detail` message, when the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail }
            | ApiError::Forbidden { detail }
            | ApiError::NotFound { detail }
            | ApiError::BadRequest { detail, .. }
            | ApiError::ServerError { detail, .. } => detail.as_deref(),
            ApiError::Network(_) | ApiError::InvalidResponse(_) | ApiError::InvalidRequest(_) => None,
        }
    }

    /// Whether this is an authentication rejection (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Origin not configured. Set `origin` or HOMEREGISTRY_ORIGIN to resolve the relative API base.")]
    MissingOrigin,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors from the persistent token slot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine home directory")]
    NoHome,

    #[error("Session storage I/O error: {0}")]
    Io(String),

    #[error("Corrupt session storage: {0}")]
    Corrupt(String),
}

/// Navigation errors raised by the router
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No route matches path: {0}")]
    NotFound(String),

    #[error("Too many redirects while navigating to {0}")]
    RedirectLoop(String),
}
