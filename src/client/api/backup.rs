//! Backup API trait

use async_trait::async_trait;

use crate::client::models::{BackupCreated, BackupList, BackupStatus, CleanupReport, Download};
use crate::error::Result;

/// Database backup and export operations
#[async_trait]
pub trait BackupApi: Send + Sync {
    async fn get_backup_status(&self) -> Result<BackupStatus>;

    async fn list_backups(&self) -> Result<BackupList>;

    /// Trigger a backup now
    async fn create_backup(&self) -> Result<BackupCreated>;

    /// Fetch one backup file by name
    async fn download_backup(&self, filename: &str) -> Result<Download>;

    /// Fetch a snapshot of the live database
    async fn download_current_database(&self) -> Result<Download>;

    /// Apply the retention policy now
    async fn run_backup_cleanup(&self) -> Result<CleanupReport>;

    /// Full data export archive
    async fn export_all_data(&self) -> Result<Download>;
}
