//! Unauthenticated response models

use serde::{Deserialize, Serialize};

use super::item::ItemCondition;

/// Limited item view served to anyone holding the item's QR link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
    /// Primary image, or the first image when none is flagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_id: Option<String>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}
