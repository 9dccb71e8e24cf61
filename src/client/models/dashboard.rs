//! Dashboard statistics models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregates shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    /// Total number of items
    pub total_items: u64,

    /// Sum of current values across all items
    #[serde(default)]
    pub total_value: f64,

    /// Item counts per category ("Uncategorized" for none)
    #[serde(default)]
    pub items_by_category: Vec<NamedCount>,

    /// Item counts per location ("No Location" for none)
    #[serde(default)]
    pub items_by_location: Vec<NamedCount>,

    /// The ten most recently added items
    #[serde(default)]
    pub recent_items: Vec<RecentItem>,

    /// Warranties expiring in the next 30 days
    #[serde(default)]
    pub expiring_warranties: Vec<ExpiringWarranty>,
}

/// A label with an item count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentItem {
    pub id: String,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiringWarranty {
    pub id: String,
    pub name: String,
    pub warranty_expiration: NaiveDate,
    pub days_remaining: i64,
}
