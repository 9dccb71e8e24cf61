//! Mutation functional tests
//!
//! These tests create, update and delete records on a real backend. Each test
//! names its records with the `homeregistry-functest-*` prefix and cleans them
//! up automatically.
//!
//! **IMPORTANT**: These tests modify data. Use only against test backends
//! unless you explicitly confirm otherwise.

use homeregistry_client::client::models::{
    CreateItemRequest, CreateLocationRequest, LocationType, Patch, UpdateCategoryRequest,
    UpdateItemRequest,
};
use homeregistry_client::client::{CategoryApi, ItemApi, LocationApi};

use super::{FunctionalTestContext, TEST_RESOURCE_PREFIX, TestCategory, test_resource_name};

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_category_create_and_auto_cleanup() {
    let ctx = FunctionalTestContext::new().await;
    let category = TestCategory::create(&ctx).await;

    assert!(category.category.name.starts_with(TEST_RESOURCE_PREFIX));

    let tree = ctx.client.get_categories().await.unwrap();
    assert!(tree.iter().any(|c| c.category.id == category.category.id));
}

#[tokio::test(flavor = "multi_thread")]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_category_rename() {
    let ctx = FunctionalTestContext::new().await;
    let category = TestCategory::create(&ctx).await;
    let renamed = test_resource_name();

    let updated = ctx
        .client
        .update_category(
            &category.category.id,
            &UpdateCategoryRequest {
                name: Some(renamed.clone()),
                parent_id: Patch::Keep,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, renamed);
}

// ============================================================================
// Location Tests
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_location_create_and_delete() {
    let ctx = FunctionalTestContext::new().await;

    let created = ctx
        .client
        .create_location(&CreateLocationRequest {
            name: test_resource_name(),
            description: None,
            location_type: LocationType::Storage,
            parent_id: None,
        })
        .await
        .unwrap();
    assert_eq!(created.location_type, LocationType::Storage);

    ctx.client.delete_location(&created.id).await.unwrap();
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_item_lifecycle() {
    let ctx = FunctionalTestContext::new().await;
    let category = TestCategory::create(&ctx).await;

    let mut request = CreateItemRequest::named(test_resource_name());
    request.category_id = Some(category.category.id.clone());
    request.current_value = Some(250.0);

    let item = ctx.client.create_item(&request).await.unwrap();
    assert_eq!(item.category_id.as_deref(), Some(category.category.id.as_str()));
    assert_eq!(item.current_value, Some(250.0));

    let update = UpdateItemRequest {
        notes: Patch::Set("updated by functional test".to_string()),
        ..UpdateItemRequest::default()
    };
    let updated = ctx.client.update_item(&item.id, &update).await.unwrap();
    assert_eq!(updated.notes.as_deref(), Some("updated by functional test"));

    ctx.client.delete_item(&item.id).await.unwrap();
    assert!(ctx.client.get_item(&item.id).await.is_err());
}
