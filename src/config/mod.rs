//! Configuration management for the HomeRegistry client
//!
//! Settings come from an optional YAML file (`~/.homeregistry/config.yaml`)
//! with environment variables layered on top. The build mode picks the API
//! base: a relative `/api` behind the configured origin in production, a fixed
//! local address in development.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result, StorageError};

/// API base used in production, relative to the page origin
pub const PRODUCTION_API_BASE: &str = "/api";

/// API base used in development
pub const DEVELOPMENT_API_BASE: &str = "http://localhost:8000/api";

/// Environment variable selecting the config file
pub const ENV_CONFIG: &str = "HOMEREGISTRY_CONFIG";
/// Environment variable overriding the build mode
pub const ENV_MODE: &str = "HOMEREGISTRY_MODE";
/// Environment variable overriding the origin
pub const ENV_ORIGIN: &str = "HOMEREGISTRY_ORIGIN";
/// Environment variable overriding the API base
pub const ENV_API_BASE: &str = "HOMEREGISTRY_API_BASE";
/// Environment variable overriding the session file location
pub const ENV_SESSION_FILE: &str = "HOMEREGISTRY_SESSION_FILE";

/// Build mode, selects the API base address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

impl std::str::FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(BuildMode::Production),
            "development" | "dev" => Ok(BuildMode::Development),
            other => Err(ConfigError::Invalid(format!("unknown build mode '{}'", other))),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Build mode
    #[serde(default)]
    pub mode: BuildMode,

    /// Page origin (scheme + host), resolves the relative production base
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Explicit API base, replaces the mode-derived one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Location of the persisted session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration for the given build mode
    pub fn for_mode(mode: BuildMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the origin used to resolve a relative API base
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Override the API base
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Get the configuration directory (~/.homeregistry)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".homeregistry"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Load configuration the standard way: file from `HOMEREGISTRY_CONFIG` or
    /// the default path (defaults when absent), then environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(ENV_CONFIG).ok();
        let config = Self::load_at(path.as_deref())?;
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load from an optional explicit path, falling back to defaults when the
    /// file does not exist.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: ClientConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply environment overrides. `lookup` abstracts `std::env::var` so the
    /// precedence can be exercised without touching the process environment.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(mode) = value(ENV_MODE) {
            self.mode = mode.parse()?;
        }
        if let Some(origin) = value(ENV_ORIGIN) {
            self.origin = Some(origin);
        }
        if let Some(api_base) = value(ENV_API_BASE) {
            self.api_base = Some(api_base);
        }
        if let Some(session_file) = value(ENV_SESSION_FILE) {
            self.session_file = Some(PathBuf::from(session_file));
        }

        Ok(self)
    }

    /// API base as embedded in markup. May be relative (`/api`).
    pub fn api_base(&self) -> String {
        let base = match (&self.api_base, self.mode) {
            (Some(base), _) => base.as_str(),
            (None, BuildMode::Production) => PRODUCTION_API_BASE,
            (None, BuildMode::Development) => DEVELOPMENT_API_BASE,
        };
        base.trim_end_matches('/').to_string()
    }

    /// Absolute API base used for requests. A relative base is joined onto the
    /// configured origin.
    pub fn request_base(&self) -> Result<String> {
        let base = self.api_base();
        if base.starts_with("http://") || base.starts_with("https://") {
            return Ok(base);
        }

        let origin = self.origin.as_deref().ok_or(ConfigError::MissingOrigin)?;
        let origin = origin.trim_end_matches('/');
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "origin must be an absolute http(s) URL, got '{}'",
                origin
            ))
            .into());
        }

        if base.starts_with('/') {
            Ok(format!("{}{}", origin, base))
        } else {
            Ok(format!("{}/{}", origin, base))
        }
    }

    /// Path of the persisted session token
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()
                .map_err(|_| StorageError::NoHome)?
                .join("session.yaml")),
        }
    }
}
