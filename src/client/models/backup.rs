//! Backup and export models

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Metadata for one backup file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupInfo {
    pub filename: String,
    /// Size in bytes
    pub size: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-side path, only present on freshly created backups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Response of `GET /backup/list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupList {
    pub backups: Vec<BackupInfo>,
    pub count: u64,
}

/// Retention policy for automatic backups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupRetention {
    pub hourly_hours: u32,
    pub daily_days: u32,
    pub weekly_weeks: u32,
    pub monthly_months: u32,
}

/// Response of `GET /backup/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupStatus {
    pub enabled: bool,
    pub interval_hours: u32,
    pub backup_dir: String,
    #[serde(default)]
    pub last_backup: Option<String>,
    #[serde(default)]
    pub last_error: Option<String>,
    pub count: u64,
    pub total_size: u64,
    pub retention: BackupRetention,
}

/// Response of `POST /backup/create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupCreated {
    pub success: bool,
    pub message: String,
    pub backup: BackupInfo,
}

/// Counts reported by a retention cleanup run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanupResult {
    pub kept: u64,
    pub deleted: u64,
    pub errors: u64,
}

/// Response of `DELETE /backup/cleanup`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanupReport {
    pub success: bool,
    pub message: String,
    pub result: CleanupResult,
}

/// A binary response body (backup file, database snapshot, export archive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// File name suggested by the server's `Content-Disposition` header
    pub filename: Option<String>,
    /// `Content-Type` of the body
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Parse the `filename` parameter out of a `Content-Disposition` header value.
    ///
    /// Prefers the RFC 5987 `filename*=UTF-8''...` form, percent-decoded, and
    /// falls back to `filename="..."` when that is absent or not valid UTF-8.
    pub fn filename_from_disposition(header: &str) -> Option<String> {
        let mut plain = None;
        let mut extended = None;

        for param in header.split(';').map(str::trim) {
            if let Some(value) = param.strip_prefix("filename*=") {
                let value = value.trim_matches('"');
                let encoded = value.rsplit("''").next().unwrap_or(value);
                extended = percent_decode_str(encoded)
                    .decode_utf8()
                    .ok()
                    .filter(|name| !name.is_empty())
                    .map(|name| name.into_owned());
            } else if let Some(value) = param.strip_prefix("filename=") {
                let value = value.trim_matches('"');
                if !value.is_empty() {
                    plain = Some(value.to_string());
                }
            }
        }

        extended.or(plain)
    }
}
