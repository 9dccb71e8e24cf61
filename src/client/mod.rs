//! HomeRegistry API client
//!
//! [`HomeRegistryClient`] is the one place HTTP happens. It is wired to the
//! rest of the application through two seams: a [`CredentialProvider`] that
//! supplies the bearer token per request, and a [`SessionExpiryNotifier`] that
//! hears about every 401.

pub mod api;
mod homeregistry;
pub mod links;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod upload;

pub use api::{
    AuthApi, BackupApi, CategoryApi, DashboardApi, InsuranceApi, ItemApi, LocationApi, MediaApi,
    PropertyApi, PublicApi, SettingsApi,
};
pub use homeregistry::HomeRegistryClient;
pub use links::Links;
#[cfg(test)]
pub use mock::MockAuthApi;
pub use upload::FileUpload;

/// Supplies the bearer token attached to outgoing requests
pub trait CredentialProvider: Send + Sync {
    /// Token for the next request, or `None` to send it unauthenticated
    fn bearer_token(&self) -> Option<String>;
}

/// Told when the server rejects the session with a 401
pub trait SessionExpiryNotifier: Send + Sync {
    fn session_expired(&self);
}

/// No token, and 401s are left to the caller.
///
/// Suitable for the public endpoints and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl CredentialProvider for NoSession {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

impl SessionExpiryNotifier for NoSession {
    fn session_expired(&self) {}
}

/// The complete HomeRegistry API surface
///
/// Implemented automatically for any type that implements every sub-trait.
pub trait HomeRegistryApi:
    AuthApi
    + SettingsApi
    + LocationApi
    + CategoryApi
    + ItemApi
    + MediaApi
    + PropertyApi
    + InsuranceApi
    + DashboardApi
    + BackupApi
    + PublicApi
{
}

impl<T> HomeRegistryApi for T where
    T: AuthApi
        + SettingsApi
        + LocationApi
        + CategoryApi
        + ItemApi
        + MediaApi
        + PropertyApi
        + InsuranceApi
        + DashboardApi
        + BackupApi
        + PublicApi
{
}
