//! HomeRegistry API data models
//!
//! Request and response types for every resource the client touches,
//! organized by resource.

mod auth;
mod backup;
mod common;
mod dashboard;
mod item;
mod location;
mod media;
mod property;
mod public;
mod settings;
mod user;

pub use auth::{AccessToken, AuthStatus, LoginRequest, RegisterRequest};
pub use backup::{
    BackupCreated, BackupInfo, BackupList, BackupRetention, BackupStatus, CleanupReport,
    CleanupResult, Download,
};
pub use common::{Message, Patch};
pub use dashboard::{DashboardStats, ExpiringWarranty, NamedCount, RecentItem};
pub use item::{
    AiAnalysisResult, BatchDeleteRequest, BatchUpdateRequest, CreateItemRequest, ImageAnalysis,
    Item, ItemCondition, ItemFilter, ItemList, UpdateItemRequest,
};
pub use location::{
    Category, CategoryTree, CreateCategoryRequest, CreateLocationRequest, InventoryLocation,
    LocationTree, LocationType, UpdateCategoryRequest, UpdateLocationRequest,
};
pub use media::{Document, DocumentType, Image};
pub use property::{
    CreateInsurancePolicyRequest, CreatePropertyRequest, InsurancePolicy, PolicyType, Property,
    PropertySummary, PropertyType, UpdateInsurancePolicyRequest, UpdatePropertyRequest,
};
pub use public::{HealthStatus, PublicItem};
pub use settings::{Settings, TestAiRequest, TestAiResult, UpdateSettingsRequest};
pub use user::{UpdateUserRequest, User};
