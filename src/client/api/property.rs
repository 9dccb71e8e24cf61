//! Property, insurance and dashboard API traits

use async_trait::async_trait;

use crate::client::models::{
    CreateInsurancePolicyRequest, CreatePropertyRequest, DashboardStats, InsurancePolicy, Message,
    Property, PropertySummary, UpdateInsurancePolicyRequest, UpdatePropertyRequest,
};
use crate::error::Result;

/// Property operations
#[async_trait]
pub trait PropertyApi: Send + Sync {
    async fn get_properties(&self) -> Result<Vec<PropertySummary>>;

    async fn get_property(&self, id: &str) -> Result<Property>;

    async fn create_property(&self, property: &CreatePropertyRequest) -> Result<Property>;

    async fn update_property(&self, id: &str, property: &UpdatePropertyRequest)
    -> Result<Property>;

    async fn delete_property(&self, id: &str) -> Result<Message>;
}

/// Insurance policy operations
#[async_trait]
pub trait InsuranceApi: Send + Sync {
    /// Policies, optionally limited to one property
    async fn get_insurance_policies(&self, property_id: Option<&str>)
    -> Result<Vec<InsurancePolicy>>;

    async fn get_insurance_policy(&self, id: &str) -> Result<InsurancePolicy>;

    async fn create_insurance_policy(
        &self,
        policy: &CreateInsurancePolicyRequest,
    ) -> Result<InsurancePolicy>;

    async fn update_insurance_policy(
        &self,
        id: &str,
        policy: &UpdateInsurancePolicyRequest,
    ) -> Result<InsurancePolicy>;

    async fn delete_insurance_policy(&self, id: &str) -> Result<Message>;
}

/// Dashboard statistics
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_dashboard_stats(&self, property_id: Option<&str>) -> Result<DashboardStats>;
}
