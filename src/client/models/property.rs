//! Property and insurance policy models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{Patch, deserialize_amount};

/// Kind of property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Cabin,
    StorageUnit,
    Other,
}

/// Property row as returned by `GET /properties`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertySummary {
    pub id: String,
    pub name: String,
    pub address_city: String,
    pub address_country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    /// Number of insurance policies attached
    #[serde(default)]
    pub policy_count: u64,
}

/// Full property record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address_street: String,
    pub address_city: String,
    pub address_state: String,
    pub address_postal_code: String,
    pub address_country: String,
    pub primary_contact_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_residents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_meters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Policies covering this property, in summary form
    #[serde(default)]
    pub insurance_policies: Vec<serde_json::Value>,
}

/// Body of `POST /properties`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePropertyRequest {
    pub name: String,
    pub address_street: String,
    pub address_city: String,
    pub address_state: String,
    pub address_postal_code: String,
    pub address_country: String,
    pub primary_contact_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_residents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_meters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PUT /properties/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdatePropertyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub primary_contact_email: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub primary_contact_phone: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub additional_residents: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub property_type: Patch<PropertyType>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub year_built: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub square_meters: Patch<u32>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub notes: Patch<String>,
}

/// Kind of insurance coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    Homeowners,
    Renters,
    Flood,
    Earthquake,
    Umbrella,
    Contents,
    Building,
    Other,
}

/// Insurance policy attached to a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePolicy {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub company_name: String,
    pub policy_number: String,
    pub policy_type: PolicyType,
    #[serde(default, deserialize_with = "deserialize_amount", skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount", skip_serializing_if = "Option::is_none")]
    pub deductible: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount", skip_serializing_if = "Option::is_none")]
    pub premium: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
}

fn default_currency() -> String {
    "NOK".to_string()
}

/// Body of `POST /insurance-policies`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateInsurancePolicyRequest {
    pub property_id: String,
    pub name: String,
    pub company_name: String,
    pub policy_number: String,
    pub policy_type: PolicyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductible: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PUT /insurance-policies/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateInsurancePolicyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub coverage_amount: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub deductible: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub premium: Patch<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub start_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub renewal_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub agent_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub agent_phone: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub agent_email: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub notes: Patch<String>,
}
