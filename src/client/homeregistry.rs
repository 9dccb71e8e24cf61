//! HomeRegistry API client implementation

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{
    AuthApi, BackupApi, CategoryApi, DashboardApi, InsuranceApi, ItemApi, LocationApi, MediaApi,
    PropertyApi, PublicApi, SettingsApi,
};
use super::links::Links;
use super::models::{
    AccessToken, AuthStatus, BackupCreated, BackupList, BackupStatus, BatchDeleteRequest,
    BatchUpdateRequest, Category, CategoryTree, CleanupReport, CreateCategoryRequest,
    CreateInsurancePolicyRequest, CreateItemRequest, CreateLocationRequest, CreatePropertyRequest,
    DashboardStats, Document, DocumentType, Download, HealthStatus, Image, ImageAnalysis,
    InsurancePolicy, InventoryLocation, Item, ItemFilter, ItemList, LocationTree, LoginRequest,
    Message, Property, PropertySummary, PublicItem, RegisterRequest, Settings, TestAiRequest,
    TestAiResult, UpdateCategoryRequest, UpdateInsurancePolicyRequest, UpdateItemRequest,
    UpdateLocationRequest, UpdatePropertyRequest, UpdateSettingsRequest, UpdateUserRequest, User,
};
use super::upload::FileUpload;
use super::{CredentialProvider, SessionExpiryNotifier};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// HomeRegistry API client
///
/// The single point of HTTP communication. Every request picks up the bearer
/// token from the [`CredentialProvider`]; every 401 response is reported to the
/// [`SessionExpiryNotifier`] before the error is returned to the caller.
///
/// There are no timeouts or retries: a failed call fails once, a hung call
/// hangs.
pub struct HomeRegistryClient {
    http: HttpClient,
    base_url: String,
    links: Links,
    credentials: Arc<dyn CredentialProvider>,
    expiry: Arc<dyn SessionExpiryNotifier>,
}

impl HomeRegistryClient {
    /// Create a client for the configured API base
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
        expiry: Arc<dyn SessionExpiryNotifier>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.request_base()?,
            links: Links::new(config.api_base()),
            credentials,
            expiry,
        })
    }

    /// Absolute API base requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builders for direct file/report/QR URLs
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Build a request and attach the bearer token, if one is stored
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, &url);

        match self.credentials.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and classify the response status
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = match response.text().await {
            Ok(body) => extract_detail(&body),
            Err(_) => None,
        };

        let err = ApiError::from_status(status, detail);
        if err.is_unauthorized() {
            warn!("Request rejected with 401, expiring session");
            self.expiry.session_expired();
        } else {
            debug!("Request failed with {}", status);
        }

        Err(err.into())
    }

    /// Send a request and decode a JSON body
    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }

    /// Send a request and keep the body as bytes
    async fn download(&self, builder: RequestBuilder) -> Result<Download> {
        let response = self.send(builder).await?;

        let filename = header_value(&response, CONTENT_DISPOSITION)
            .as_deref()
            .and_then(Download::filename_from_disposition);
        let content_type = header_value(&response, CONTENT_TYPE);

        let bytes = response.bytes().await.map_err(ApiError::from)?.to_vec();

        Ok(Download {
            filename,
            content_type,
            bytes,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.json(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.json(self.request(Method::POST, path).json(body)).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.json(self.request(Method::PUT, path).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.json(self.request(Method::DELETE, path)).await
    }

    /// GET with an optional `property_id` query parameter
    async fn get_for_property<T: DeserializeOwned>(
        &self,
        path: &str,
        property_id: Option<&str>,
    ) -> Result<T> {
        let builder = self.request(Method::GET, path);
        let builder = match property_id.filter(|id| !id.is_empty()) {
            Some(id) => builder.query(&[("property_id", id)]),
            None => builder,
        };
        self.json(builder).await
    }
}

fn header_value(response: &Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Pull a human-readable message out of an error body.
///
/// The server answers errors as `{"detail": "..."}`; request validation
/// failures carry a list of `{"msg": ...}` entries instead, which are joined.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl AuthApi for HomeRegistryClient {
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        self.post("/auth/login", &LoginRequest { username, password })
            .await
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<User> {
        self.post(
            "/auth/register",
            &RegisterRequest {
                username,
                password,
                email,
            },
        )
        .await
    }

    async fn get_me(&self) -> Result<User> {
        self.get("/auth/me").await
    }

    async fn update_me(&self, update: &UpdateUserRequest) -> Result<User> {
        self.put("/auth/me", update).await
    }

    async fn get_auth_status(&self) -> Result<AuthStatus> {
        self.get("/auth/status").await
    }
}

#[async_trait]
impl SettingsApi for HomeRegistryClient {
    async fn get_settings(&self) -> Result<Settings> {
        self.get("/settings").await
    }

    async fn update_settings(&self, settings: &UpdateSettingsRequest) -> Result<Settings> {
        self.put("/settings", settings).await
    }

    async fn test_ai(
        &self,
        provider: &str,
        api_key: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<TestAiResult> {
        self.post(
            "/settings/test-ai",
            &TestAiRequest {
                provider,
                api_key,
                endpoint,
            },
        )
        .await
    }
}

#[async_trait]
impl LocationApi for HomeRegistryClient {
    async fn get_locations(&self, property_id: Option<&str>) -> Result<Vec<LocationTree>> {
        self.get_for_property("/locations", property_id).await
    }

    async fn create_location(
        &self,
        location: &CreateLocationRequest,
    ) -> Result<InventoryLocation> {
        self.post("/locations", location).await
    }

    async fn update_location(
        &self,
        id: &str,
        location: &UpdateLocationRequest,
    ) -> Result<InventoryLocation> {
        self.put(&format!("/locations/{}", id), location).await
    }

    async fn delete_location(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/locations/{}", id)).await
    }
}

#[async_trait]
impl CategoryApi for HomeRegistryClient {
    async fn get_categories(&self) -> Result<Vec<CategoryTree>> {
        self.get("/categories").await
    }

    async fn create_category(&self, category: &CreateCategoryRequest) -> Result<Category> {
        self.post("/categories", category).await
    }

    async fn update_category(
        &self,
        id: &str,
        category: &UpdateCategoryRequest,
    ) -> Result<Category> {
        self.put(&format!("/categories/{}", id), category).await
    }

    async fn delete_category(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/categories/{}", id)).await
    }
}

#[async_trait]
impl ItemApi for HomeRegistryClient {
    async fn get_items(&self, filter: &ItemFilter) -> Result<ItemList> {
        self.json(self.request(Method::GET, "/items").query(filter))
            .await
    }

    async fn get_item(&self, id: &str) -> Result<Item> {
        self.get(&format!("/items/{}", id)).await
    }

    async fn create_item(&self, item: &CreateItemRequest) -> Result<Item> {
        self.post("/items", item).await
    }

    async fn update_item(&self, id: &str, item: &UpdateItemRequest) -> Result<Item> {
        self.put(&format!("/items/{}", id), item).await
    }

    async fn delete_item(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/items/{}", id)).await
    }

    async fn batch_update_items(
        &self,
        item_ids: &[String],
        updates: &UpdateItemRequest,
    ) -> Result<Value> {
        self.post(
            "/items/batch-update",
            &BatchUpdateRequest { item_ids, updates },
        )
        .await
    }

    async fn batch_delete_items(&self, item_ids: &[String]) -> Result<Value> {
        self.post("/items/batch-delete", &BatchDeleteRequest { item_ids })
            .await
    }

    async fn analyze_images(&self, files: Vec<FileUpload>) -> Result<ImageAnalysis> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", file.into_part()?);
        }

        self.json(
            self.request(Method::POST, "/items/analyze-images")
                .multipart(form),
        )
        .await
    }
}

#[async_trait]
impl MediaApi for HomeRegistryClient {
    async fn add_item_image(&self, item_id: &str, file: FileUpload) -> Result<Image> {
        let form = Form::new().part("file", file.into_part()?);
        self.json(
            self.request(Method::POST, &format!("/items/{}/images", item_id))
                .multipart(form),
        )
        .await
    }

    async fn delete_image(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/images/{}", id)).await
    }

    async fn set_primary_image(&self, id: &str) -> Result<Image> {
        self.json(self.request(Method::PUT, &format!("/images/{}/primary", id)))
            .await
    }

    async fn upload_document(
        &self,
        item_id: &str,
        file: FileUpload,
        document_type: DocumentType,
    ) -> Result<Document> {
        let form = Form::new()
            .part("file", file.into_part()?)
            .text("document_type", document_type.as_str());

        self.json(
            self.request(Method::POST, &format!("/items/{}/documents", item_id))
                .multipart(form),
        )
        .await
    }

    async fn delete_document(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/documents/{}", id)).await
    }
}

#[async_trait]
impl DashboardApi for HomeRegistryClient {
    async fn get_dashboard_stats(&self, property_id: Option<&str>) -> Result<DashboardStats> {
        self.get_for_property("/dashboard/stats", property_id).await
    }
}

#[async_trait]
impl PropertyApi for HomeRegistryClient {
    async fn get_properties(&self) -> Result<Vec<PropertySummary>> {
        self.get("/properties").await
    }

    async fn get_property(&self, id: &str) -> Result<Property> {
        self.get(&format!("/properties/{}", id)).await
    }

    async fn create_property(&self, property: &CreatePropertyRequest) -> Result<Property> {
        self.post("/properties", property).await
    }

    async fn update_property(
        &self,
        id: &str,
        property: &UpdatePropertyRequest,
    ) -> Result<Property> {
        self.put(&format!("/properties/{}", id), property).await
    }

    async fn delete_property(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/properties/{}", id)).await
    }
}

#[async_trait]
impl InsuranceApi for HomeRegistryClient {
    async fn get_insurance_policies(
        &self,
        property_id: Option<&str>,
    ) -> Result<Vec<InsurancePolicy>> {
        self.get_for_property("/insurance-policies", property_id)
            .await
    }

    async fn get_insurance_policy(&self, id: &str) -> Result<InsurancePolicy> {
        self.get(&format!("/insurance-policies/{}", id)).await
    }

    async fn create_insurance_policy(
        &self,
        policy: &CreateInsurancePolicyRequest,
    ) -> Result<InsurancePolicy> {
        self.post("/insurance-policies", policy).await
    }

    async fn update_insurance_policy(
        &self,
        id: &str,
        policy: &UpdateInsurancePolicyRequest,
    ) -> Result<InsurancePolicy> {
        self.put(&format!("/insurance-policies/{}", id), policy)
            .await
    }

    async fn delete_insurance_policy(&self, id: &str) -> Result<Message> {
        self.delete(&format!("/insurance-policies/{}", id)).await
    }
}

#[async_trait]
impl BackupApi for HomeRegistryClient {
    async fn get_backup_status(&self) -> Result<BackupStatus> {
        self.get("/backup/status").await
    }

    async fn list_backups(&self) -> Result<BackupList> {
        self.get("/backup/list").await
    }

    async fn create_backup(&self) -> Result<BackupCreated> {
        self.json(self.request(Method::POST, "/backup/create"))
            .await
    }

    async fn download_backup(&self, filename: &str) -> Result<Download> {
        self.download(self.request(Method::GET, &format!("/backup/download/{}", filename)))
            .await
    }

    async fn download_current_database(&self) -> Result<Download> {
        self.download(self.request(Method::GET, "/backup/download-current"))
            .await
    }

    async fn run_backup_cleanup(&self) -> Result<CleanupReport> {
        self.delete("/backup/cleanup").await
    }

    async fn export_all_data(&self) -> Result<Download> {
        self.download(self.request(Method::GET, "/backup/export"))
            .await
    }
}

#[async_trait]
impl PublicApi for HomeRegistryClient {
    async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }

    async fn get_public_item(&self, id: &str) -> Result<PublicItem> {
        self.get(&format!("/public/items/{}", id)).await
    }
}
