//! HomeRegistry client
//!
//! Client-side core of the HomeRegistry home inventory application: the typed
//! API client, the authentication store, and the route table with its
//! navigation guard.
//!
//! Wiring a session together:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use homeregistry_client::client::HomeRegistryClient;
//! use homeregistry_client::config::ClientConfig;
//! use homeregistry_client::router::{Location, Router};
//! use homeregistry_client::session::{FileTokenStore, RedirectToLogin, StoredCredentials, TokenStore};
//! use homeregistry_client::store::AuthStore;
//!
//! # async fn run() -> homeregistry_client::Result<()> {
//! let config = ClientConfig::load()?;
//! let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.session_path()?));
//! let location = Arc::new(Location::default());
//!
//! let expiry = Arc::new(RedirectToLogin::new(tokens.clone(), location.clone()));
//! let client = Arc::new(HomeRegistryClient::new(
//!     &config,
//!     Arc::new(StoredCredentials::new(tokens.clone())),
//!     expiry.clone(),
//! )?);
//! let auth = Arc::new(
//!     AuthStore::new(client.clone(), tokens.clone()).with_session_expiry(expiry.subscribe()),
//! );
//! let router = Router::new(auth, tokens, location);
//!
//! router.start().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod session;
pub mod store;

pub use error::{Error, Result};
