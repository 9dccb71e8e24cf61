//! Read-only functional tests
//!
//! These tests verify that read operations work correctly against a real
//! backend. They do not modify any data.

use homeregistry_client::client::models::ItemFilter;
use homeregistry_client::client::{
    AuthApi, CategoryApi, DashboardApi, ItemApi, LocationApi, PropertyApi, PublicApi, SettingsApi,
};

use super::FunctionalTestContext;

// ============================================================================
// Unauthenticated Endpoints
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_health_reports_ok() {
    let ctx = FunctionalTestContext::anonymous();

    let health = ctx.client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_auth_status_reports_existing_accounts() {
    let ctx = FunctionalTestContext::anonymous();

    // The test account exists, so the backend cannot be in first-run state.
    let status = ctx.auth.check_auth_status().await;
    assert!(status.has_users);
    assert!(status.user_count >= 1);
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_login_resolves_current_user() {
    let ctx = FunctionalTestContext::new().await;

    assert!(ctx.auth.is_authenticated().await);
    let me = ctx.client.get_me().await.unwrap();
    assert_eq!(
        ctx.auth.current_user().await.map(|u| u.id),
        Some(me.id)
    );
}

// ============================================================================
// Catalog Reads
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_list_items_first_page() {
    let ctx = FunctionalTestContext::new().await;

    let list = ctx
        .client
        .get_items(&ItemFilter::new().limit(5))
        .await
        .unwrap();
    assert!(list.items.len() <= 5);
    assert!(list.total >= list.items.len() as u64);
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_list_locations_and_categories() {
    let ctx = FunctionalTestContext::new().await;

    ctx.client.get_locations(None).await.unwrap();
    ctx.client.get_categories().await.unwrap();
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_properties_and_dashboard() {
    let ctx = FunctionalTestContext::new().await;

    let properties = ctx.client.get_properties().await.unwrap();
    let stats = ctx.client.get_dashboard_stats(None).await.unwrap();

    if let Some(first) = properties.first() {
        let scoped = ctx
            .client
            .get_dashboard_stats(Some(&first.id))
            .await
            .unwrap();
        assert!(scoped.total_items <= stats.total_items);
    }
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_settings_mask_api_keys() {
    let ctx = FunctionalTestContext::new().await;

    let settings = ctx.client.get_settings().await.unwrap();
    for key in [&settings.claude_api_key, &settings.openai_api_key]
        .into_iter()
        .flatten()
    {
        assert!(key.contains('*'), "API key should be masked");
    }
}
