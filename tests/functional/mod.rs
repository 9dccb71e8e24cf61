//! Functional test harness for the HomeRegistry client
//!
//! This module provides a test context and safety guards for running functional
//! tests against a real backend. Tests are opt-in via the `functional-tests`
//! feature and refuse to touch a non-local backend without confirmation.

use std::env;
use std::sync::Arc;

use homeregistry_client::client::models::{Category, CreateCategoryRequest};
use homeregistry_client::client::{CategoryApi, HomeRegistryClient};
use homeregistry_client::config::ClientConfig;
use homeregistry_client::router::Location;
use homeregistry_client::session::{
    MemoryTokenStore, RedirectToLogin, StoredCredentials, TokenStore,
};
use homeregistry_client::store::AuthStore;

pub mod error_tests;
pub mod mutation_tests;
pub mod read_tests;

// ============================================================================
// Test Configuration
// ============================================================================

/// Prefix for test resources to identify and clean up
pub const TEST_RESOURCE_PREFIX: &str = "homeregistry-functest";

/// Hosts that never need confirmation
const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Warning banner for non-local backends
const REMOTE_WARNING: &str = r#"
+------------------------------------------------------------------+
|  REMOTE BACKEND WARNING                                          |
|                                                                  |
|  Functional tests are about to run against a non-local backend.  |
|  They make real API calls and create and delete records.         |
|                                                                  |
|  To proceed, set: HOMEREGISTRY_FUNCTIONAL_TESTS_CONFIRM=yes      |
+------------------------------------------------------------------+
"#;

// ============================================================================
// FunctionalTestContext
// ============================================================================

/// Context for functional tests: a logged-in client plus the session around it.
pub struct FunctionalTestContext {
    pub client: Arc<HomeRegistryClient>,
    pub auth: Arc<AuthStore>,
    pub tokens: Arc<dyn TokenStore>,
    pub location: Arc<Location>,
}

impl FunctionalTestContext {
    /// Build a client from the environment and log in with the test account.
    ///
    /// Panics when the backend is remote and unconfirmed, or when login fails.
    pub async fn new() -> Self {
        let ctx = Self::anonymous();

        let username =
            env::var("HOMEREGISTRY_TEST_USERNAME").expect("HOMEREGISTRY_TEST_USERNAME must be set");
        let password =
            env::var("HOMEREGISTRY_TEST_PASSWORD").expect("HOMEREGISTRY_TEST_PASSWORD must be set");

        if !ctx.auth.login(&username, &password).await {
            panic!(
                "Functional test login failed: {}",
                ctx.auth.error().await.unwrap_or_default()
            );
        }

        ctx
    }

    /// Build a client from the environment without logging in.
    pub fn anonymous() -> Self {
        let config = ClientConfig::load().expect("Failed to load client configuration");
        let base = config
            .request_base()
            .expect("Functional tests need an absolute API base");
        Self::check_remote_safety(&base);

        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let location = Arc::new(Location::default());
        let expiry = Arc::new(RedirectToLogin::new(tokens.clone(), location.clone()));
        let client = Arc::new(
            HomeRegistryClient::new(
                &config,
                Arc::new(StoredCredentials::new(tokens.clone())),
                expiry.clone(),
            )
            .expect("Failed to build client"),
        );
        let auth = Arc::new(
            AuthStore::new(client.clone(), tokens.clone()).with_session_expiry(expiry.subscribe()),
        );

        Self {
            client,
            auth,
            tokens,
            location,
        }
    }

    /// Panic with warning if targeting a remote backend without confirmation.
    fn check_remote_safety(base: &str) {
        let host = base
            .split("://")
            .nth(1)
            .and_then(|rest| rest.split(['/', ':']).next())
            .unwrap_or_default();

        if LOCAL_HOSTS.contains(&host) {
            return;
        }

        if env::var("HOMEREGISTRY_FUNCTIONAL_TESTS_CONFIRM").as_deref() != Ok("yes") {
            eprintln!("{}", REMOTE_WARNING);
            panic!(
                "Remote confirmation required. Set HOMEREGISTRY_FUNCTIONAL_TESTS_CONFIRM=yes to proceed."
            );
        }
    }
}

// ============================================================================
// Test Resource Naming
// ============================================================================

/// Generate a unique test resource name with timestamp.
///
/// Returns a name like `homeregistry-functest-1706123456789`.
pub fn test_resource_name() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{}-{}", TEST_RESOURCE_PREFIX, ts)
}

// ============================================================================
// Test Category RAII Wrapper
// ============================================================================

/// RAII wrapper for test categories that ensures cleanup on drop.
///
/// Dropping blocks on the delete call, so tests using it must run on the
/// multi-threaded runtime: `#[tokio::test(flavor = "multi_thread")]`.
pub struct TestCategory {
    client: Arc<HomeRegistryClient>,
    pub category: Category,
}

impl TestCategory {
    pub async fn create(ctx: &FunctionalTestContext) -> Self {
        let category = ctx
            .client
            .create_category(&CreateCategoryRequest {
                name: test_resource_name(),
                parent_id: None,
            })
            .await
            .expect("Failed to create test category");

        Self {
            client: ctx.client.clone(),
            category,
        }
    }
}

impl Drop for TestCategory {
    fn drop(&mut self) {
        let client = self.client.clone();
        let id = self.category.id.clone();
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                if let Err(e) = client.delete_category(&id).await {
                    eprintln!("Warning: failed to clean up test category {}: {}", id, e);
                }
            })
        });
    }
}
