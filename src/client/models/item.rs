//! Inventory item models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{Patch, deserialize_amount};
use super::media::{Document, Image};

/// Physical condition of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCondition {
    New,
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Inventory item as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Item ID (UUID)
    pub id: String,

    /// Item name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Owning property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,

    /// Number of identical units
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    /// Purchase price (decimal, sent as number or string)
    #[serde(default, deserialize_with = "deserialize_amount", skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_location: Option<String>,

    /// Current estimated value
    #[serde(default, deserialize_with = "deserialize_amount", skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,

    /// Currency code, defaults to NOK server-side
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiration: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Raw AI analysis attached when the item was created from photos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_metadata: Option<serde_json::Value>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub documents: Vec<Document>,

    /// Denormalized names for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

fn default_currency() -> String {
    "NOK".to_string()
}

impl Item {
    /// The image flagged as primary, or the first image when none is flagged
    pub fn primary_image(&self) -> Option<&Image> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
    }
}

/// One page of items from `GET /items`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemList {
    pub items: Vec<Item>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// Query filters for `GET /items`. Unset fields are omitted from the query string.
///
/// # Example
/// ```ignore
/// let filter = ItemFilter::new().search("drill").limit(20);
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ItemFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn property(mut self, property_id: impl Into<String>) -> Self {
        self.property_id = Some(property_id.into());
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn condition(mut self, condition: ItemCondition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiration: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_metadata: Option<serde_json::Value>,
}

impl CreateItemRequest {
    /// Minimal item with only a name, everything else server defaults
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            property_id: None,
            category_id: None,
            location_id: None,
            serial_number: None,
            model_number: None,
            manufacturer: None,
            condition: None,
            quantity: default_quantity(),
            purchase_date: None,
            purchase_price: None,
            purchase_location: None,
            current_value: None,
            currency: None,
            warranty_expiration: None,
            barcode: None,
            tags: None,
            notes: None,
            ai_metadata: None,
        }
    }
}

/// Partial item update, used by `PUT /items/:id` and flattened into batch updates
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub property_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub category_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub location_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub serial_number: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub model_number: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub manufacturer: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub condition: Patch<ItemCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub purchase_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub purchase_price: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub purchase_location: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub current_value: Patch<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub warranty_expiration: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub barcode: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub tags: Patch<Vec<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub notes: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub ai_metadata: Patch<serde_json::Value>,
}

/// Body of `POST /items/batch-update`: the ids plus the update fields at the top level
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateRequest<'a> {
    pub item_ids: &'a [String],
    #[serde(flatten)]
    pub updates: &'a UpdateItemRequest,
}

/// Body of `POST /items/batch-delete`
#[derive(Debug, Clone, Serialize)]
pub struct BatchDeleteRequest<'a> {
    pub item_ids: &'a [String],
}

/// AI-suggested item details extracted from photos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiAnalysisResult {
    pub item_name: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value_nok: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_location: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_info: Option<String>,
    #[serde(default)]
    pub confidence_score: f64,
}

fn default_condition() -> String {
    "good".to_string()
}

/// Response of `POST /items/analyze-images`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageAnalysis {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AiAnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub image_count: u32,
}
