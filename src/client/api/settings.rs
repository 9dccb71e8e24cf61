//! Settings API trait

use async_trait::async_trait;

use crate::client::models::{Settings, TestAiResult, UpdateSettingsRequest};
use crate::error::Result;

/// Application settings operations
#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, settings: &UpdateSettingsRequest) -> Result<Settings>;

    /// Check connectivity to an AI provider with the given credentials.
    ///
    /// A failed connection is reported in the result body, not as an error.
    async fn test_ai(
        &self,
        provider: &str,
        api_key: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<TestAiResult>;
}
