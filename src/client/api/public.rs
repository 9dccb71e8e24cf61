//! Unauthenticated API trait

use async_trait::async_trait;

use crate::client::models::{HealthStatus, PublicItem};
use crate::error::Result;

/// Endpoints the server answers without a session
#[async_trait]
pub trait PublicApi: Send + Sync {
    async fn health(&self) -> Result<HealthStatus>;

    /// Limited item view for QR code scans
    async fn get_public_item(&self, id: &str) -> Result<PublicItem>;
}
