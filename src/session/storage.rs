//! Persistent storage for the session token
//!
//! The session has exactly one persisted value: the bearer token. Its presence
//! is the only client-side signal that a session exists.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::StorageError;

type Result<T> = std::result::Result<T, StorageError>;

/// A single persisted "token" slot
pub trait TokenStore: Send + Sync {
    /// Read the stored token. Empty values read as absent.
    fn get(&self) -> Result<Option<String>>;

    /// Replace the stored token
    fn set(&self, token: &str) -> Result<()>;

    /// Clear the slot. Clearing an empty slot is not an error.
    fn remove(&self) -> Result<()>;
}

/// In-process token slot, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token (a "page reload" with a saved session)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>> {
        let token = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(token.clone().filter(|t| !t.is_empty()))
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// On-disk layout of the session file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Token slot backed by a YAML file (`~/.homeregistry/session.yaml` by default)
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, session: &SessionFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::Io(format!("Failed to create session dir: {}", e)))?;
        }

        let contents =
            serde_yaml::to_string(session).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| StorageError::Io(format!("Failed to write session file: {}", e)))?;

        // Bearer tokens are credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| StorageError::Io(format!("Failed to read session file: {}", e)))?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let session: SessionFile =
            serde_yaml::from_str(&contents).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        Ok(session.token.filter(|t| !t.is_empty()))
    }

    fn set(&self, token: &str) -> Result<()> {
        self.write(&SessionFile {
            token: Some(token.to_string()),
        })
    }

    fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to remove session file: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().unwrap(), None);

        store.set("abc").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("abc"));

        store.remove().unwrap();
        assert_eq!(store.get().unwrap(), None);

        // removing twice is fine
        store.remove().unwrap();
    }

    #[test]
    fn test_memory_store_empty_token_is_absent() {
        let store = MemoryTokenStore::with_token("");
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let store = FileTokenStore::new(temp.path().join("session.yaml"));
        assert_eq!(store.get().unwrap(), None);
        store.remove().unwrap();
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("session.yaml");

        FileTokenStore::new(&path).set("persisted-token").unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get().unwrap().as_deref(), Some("persisted-token"));

        reopened.remove().unwrap();
        assert!(!path.exists());
        assert_eq!(FileTokenStore::new(&path).get().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let store = FileTokenStore::new(temp.path().join("session.yaml"));
        store.set("secret").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_file_store_corrupt_contents() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("session.yaml");
        std::fs::write(&path, "token: [unterminated").unwrap();

        let err = FileTokenStore::new(&path).get().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
