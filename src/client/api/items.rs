//! Item API traits
//!
//! This covers the item collection itself plus the media hanging off items:
//! - [`ItemApi`] - CRUD, batch operations and photo analysis
//! - [`MediaApi`] - images and documents attached to items

use async_trait::async_trait;

use crate::client::models::{
    CreateItemRequest, Document, DocumentType, Image, ImageAnalysis, Item, ItemFilter, ItemList,
    Message, UpdateItemRequest,
};
use crate::client::upload::FileUpload;
use crate::error::Result;

/// Inventory item operations
#[async_trait]
pub trait ItemApi: Send + Sync {
    /// One page of items matching the filter
    async fn get_items(&self, filter: &ItemFilter) -> Result<ItemList>;

    async fn get_item(&self, id: &str) -> Result<Item>;

    async fn create_item(&self, item: &CreateItemRequest) -> Result<Item>;

    async fn update_item(&self, id: &str, item: &UpdateItemRequest) -> Result<Item>;

    async fn delete_item(&self, id: &str) -> Result<Message>;

    /// Apply the same partial update to many items.
    ///
    /// The response shape is defined by the server and passed through as-is.
    async fn batch_update_items(
        &self,
        item_ids: &[String],
        updates: &UpdateItemRequest,
    ) -> Result<serde_json::Value>;

    /// Delete many items at once. Response passed through as-is.
    async fn batch_delete_items(&self, item_ids: &[String]) -> Result<serde_json::Value>;

    /// Ask the configured AI provider to describe the item in the photos
    async fn analyze_images(&self, files: Vec<FileUpload>) -> Result<ImageAnalysis>;
}

/// Image and document operations
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn add_item_image(&self, item_id: &str, file: FileUpload) -> Result<Image>;

    async fn delete_image(&self, id: &str) -> Result<Message>;

    /// Flag an image as its item's primary image
    async fn set_primary_image(&self, id: &str) -> Result<Image>;

    async fn upload_document(
        &self,
        item_id: &str,
        file: FileUpload,
        document_type: DocumentType,
    ) -> Result<Document>;

    async fn delete_document(&self, id: &str) -> Result<Message>;
}
