//! Image and document models

use serde::{Deserialize, Serialize};

/// Item photo metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    pub id: String,
    pub item_id: String,
    /// Stored file name on the server
    pub filename: String,
    /// File name as uploaded
    pub original_filename: String,
    pub file_size: u64,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
}

/// Kind of attached document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Warranty,
    Manual,
    Receipt,
    Other,
}

impl DocumentType {
    /// Wire name, as sent in the multipart `document_type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Warranty => "warranty",
            DocumentType::Manual => "manual",
            DocumentType::Receipt => "receipt",
            DocumentType::Other => "other",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document attached to an item (receipt, manual, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,
    pub item_id: String,
    pub filename: String,
    pub original_filename: String,
    pub document_type: DocumentType,
    pub file_size: u64,
    pub mime_type: String,
    #[serde(default)]
    pub created_at: String,
}
