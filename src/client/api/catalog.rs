//! Location and category API traits

use async_trait::async_trait;

use crate::client::models::{
    Category, CategoryTree, CreateCategoryRequest, CreateLocationRequest, InventoryLocation,
    LocationTree, Message, UpdateCategoryRequest, UpdateLocationRequest,
};
use crate::error::Result;

/// Storage location operations
#[async_trait]
pub trait LocationApi: Send + Sync {
    /// Location trees, optionally limited to one property
    async fn get_locations(&self, property_id: Option<&str>) -> Result<Vec<LocationTree>>;

    async fn create_location(&self, location: &CreateLocationRequest)
    -> Result<InventoryLocation>;

    async fn update_location(
        &self,
        id: &str,
        location: &UpdateLocationRequest,
    ) -> Result<InventoryLocation>;

    async fn delete_location(&self, id: &str) -> Result<Message>;
}

/// Category operations
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn get_categories(&self) -> Result<Vec<CategoryTree>>;

    async fn create_category(&self, category: &CreateCategoryRequest) -> Result<Category>;

    async fn update_category(&self, id: &str, category: &UpdateCategoryRequest)
    -> Result<Category>;

    async fn delete_category(&self, id: &str) -> Result<Message>;
}
