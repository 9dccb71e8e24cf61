//! API trait definitions split by responsibility
//!
//! This module organizes the HomeRegistry API surface into focused sub-traits:
//! - [`AuthApi`] - Login, registration and identity
//! - [`SettingsApi`] - Application settings and AI provider checks
//! - [`LocationApi`] / [`CategoryApi`] - Hierarchical catalogs
//! - [`ItemApi`] / [`MediaApi`] - Items and their images and documents
//! - [`PropertyApi`] / [`InsuranceApi`] / [`DashboardApi`] - Properties and reporting
//! - [`BackupApi`] - Backups and exports
//! - [`PublicApi`] - Endpoints that need no session
//!
//! The [`HomeRegistryApi`](super::HomeRegistryApi) super-trait combines all of them.

mod auth;
mod backup;
mod catalog;
mod items;
mod property;
mod public;
mod settings;

pub use auth::AuthApi;
pub use backup::BackupApi;
pub use catalog::{CategoryApi, LocationApi};
pub use items::{ItemApi, MediaApi};
pub use property::{DashboardApi, InsuranceApi, PropertyApi};
pub use public::PublicApi;
pub use settings::SettingsApi;
