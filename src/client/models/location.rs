//! Location and category models
//!
//! Both resources are hierarchical. List endpoints return trees (roots with
//! nested `children`), mutations return a single flat record.

use serde::{Deserialize, Serialize};

use super::common::Patch;

/// Kind of storage location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Home,
    Floor,
    Room,
    Storage,
}

/// A location as returned by create/update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryLocation {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Number of items stored directly in this location
    #[serde(default)]
    pub item_count: u64,
}

/// A location with its nested sub-locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationTree {
    #[serde(flatten)]
    pub location: InventoryLocation,
    #[serde(default)]
    pub children: Vec<LocationTree>,
}

impl LocationTree {
    /// Depth-first walk over this node and all descendants
    pub fn iter(&self) -> Box<dyn Iterator<Item = &LocationTree> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(|c| c.iter())))
    }
}

/// Body of `POST /locations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateLocationRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body of `PUT /locations/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateLocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub parent_id: Patch<String>,
}

/// Item category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub item_count: u64,
}

/// A category with its sub-categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub children: Vec<CategoryTree>,
}

/// Body of `POST /categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body of `PUT /categories/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCategoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub parent_id: Patch<String>,
}
