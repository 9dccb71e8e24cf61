//! Session plumbing between the token slot, the HTTP client and the location
//!
//! The client never touches storage or navigation directly. It asks a
//! [`CredentialProvider`] for the bearer token and tells a
//! [`SessionExpiryNotifier`] when the server rejects it. The implementations
//! here bind those seams to a [`TokenStore`] and a [`Location`].

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;

use crate::client::{CredentialProvider, SessionExpiryNotifier};
use crate::router::{LOGIN_PATH, Location, REGISTER_PATH};

mod storage;

pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Reads the bearer token from the persisted slot on every request
pub struct StoredCredentials {
    tokens: Arc<dyn TokenStore>,
}

impl StoredCredentials {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }
}

impl CredentialProvider for StoredCredentials {
    fn bearer_token(&self) -> Option<String> {
        match self.tokens.get() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read session token, sending request without it: {}", e);
                None
            }
        }
    }
}

/// Clears the stored token on a 401 and sends the user to the login view
///
/// The redirect is a hard navigation: it bypasses the router guard, the same
/// as a full page load would. It is skipped while the user is already on the
/// login or registration view so a failed login cannot loop.
///
/// Every expiry also bumps a counter that an
/// [`AuthStore`](crate::store::AuthStore) can follow through
/// [`subscribe`](Self::subscribe) to drop its in-memory session.
pub struct RedirectToLogin {
    tokens: Arc<dyn TokenStore>,
    location: Arc<Location>,
    expired: watch::Sender<u64>,
}

impl RedirectToLogin {
    pub fn new(tokens: Arc<dyn TokenStore>, location: Arc<Location>) -> Self {
        let (expired, _) = watch::channel(0);
        Self {
            tokens,
            location,
            expired,
        }
    }

    /// Receiver that changes each time the server rejects the session
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.expired.subscribe()
    }
}

impl SessionExpiryNotifier for RedirectToLogin {
    fn session_expired(&self) {
        if let Err(e) = self.tokens.remove() {
            warn!("Failed to clear rejected session token: {}", e);
        }
        self.expired.send_modify(|count| *count += 1);

        let current = self.location.pathname();
        if current == LOGIN_PATH || current == REGISTER_PATH {
            debug!("Session rejected while on {}, staying put", current);
            return;
        }

        warn!("Session rejected by server, redirecting {} -> {}", current, LOGIN_PATH);
        self.location.assign(LOGIN_PATH);
    }
}
