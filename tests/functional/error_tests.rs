//! Error scenario functional tests
//!
//! These tests verify that a real backend's failures surface as the right
//! error variants, with the server's message attached.

use homeregistry_client::client::{ItemApi, PublicApi};
use homeregistry_client::error::{ApiError, Error};
use homeregistry_client::session::TokenStore;

use super::FunctionalTestContext;

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_unknown_item_is_not_found() {
    let ctx = FunctionalTestContext::new().await;

    let err = ctx
        .client
        .get_item("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::NotFound { .. })));
    assert!(err.detail().is_some());
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_unknown_public_item_is_not_found() {
    let ctx = FunctionalTestContext::anonymous();

    let err = ctx
        .client
        .get_public_item("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::NotFound { .. })));
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_wrong_password_is_reported_on_store() {
    let ctx = FunctionalTestContext::anonymous();

    assert!(!ctx.auth.login("homeregistry-functest-nobody", "wrong").await);
    assert!(ctx.auth.error().await.is_some());
    assert!(!ctx.auth.is_authenticated().await);
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_protected_call_without_token_expires_session() {
    let ctx = FunctionalTestContext::new().await;
    ctx.auth.logout().await;

    let err = ctx
        .client
        .get_items(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Unauthorized { .. })));
    assert_eq!(ctx.location.path(), "/login");
    assert_eq!(ctx.tokens.get().unwrap(), None);
}
