//! Authentication session state

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, RwLock, RwLockReadGuard, watch};

use crate::client::AuthApi;
use crate::client::models::{AuthStatus, UpdateUserRequest, User};
use crate::error::Error;
use crate::session::TokenStore;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const UPDATE_FAILED: &str = "Update failed";

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    /// Last failure, as a message fit for display
    pub error: Option<String>,
}

impl AuthState {
    /// A token alone is not enough; the user record must be resolved too.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }
}

/// Process-wide authentication state and the operations that change it
///
/// Operations never fail outright: failures are folded into [`AuthState::error`]
/// and a `false` return. State is locked only between API calls, so
/// concurrent operations interleave and the last response wins.
///
/// A store wired to a session-expiry signal with
/// [`with_session_expiry`](Self::with_session_expiry) forgets its token and
/// user once the server rejects the session, before the next read or change.
pub struct AuthStore {
    api: Arc<dyn AuthApi>,
    tokens: Arc<dyn TokenStore>,
    state: RwLock<AuthState>,
    expiry: Option<Mutex<watch::Receiver<u64>>>,
}

impl AuthStore {
    /// Create the store, picking up a token left in persistent storage.
    pub fn new(api: Arc<dyn AuthApi>, tokens: Arc<dyn TokenStore>) -> Self {
        let token = tokens.get().unwrap_or_else(|e| {
            warn!("Could not read stored session token: {}", e);
            None
        });

        Self {
            api,
            tokens,
            state: RwLock::new(AuthState {
                token,
                ..AuthState::default()
            }),
            expiry: None,
        }
    }

    /// Follow a session-expiry signal, such as
    /// [`RedirectToLogin::subscribe`](crate::session::RedirectToLogin::subscribe).
    pub fn with_session_expiry(mut self, expiry: watch::Receiver<u64>) -> Self {
        self.expiry = Some(Mutex::new(expiry));
        self
    }

    /// Resolve the user for a token restored from persistent storage.
    pub async fn initialize(&self) {
        if self.read().await.token.is_some() {
            debug!("Restoring session from stored token");
            self.fetch_user().await;
        }
    }

    /// Exchange credentials for a token, then load the user record.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.begin().await;

        let ok = match self.api.login(username, password).await {
            Ok(token) => {
                self.state.write().await.token = Some(token.access_token.clone());
                if let Err(e) = self.tokens.set(&token.access_token) {
                    warn!("Failed to persist session token: {}", e);
                }
                info!("Logged in as {}", username);
                self.fetch_user().await;
                true
            }
            Err(e) => {
                debug!("Login failed: {}", e);
                self.fail(&e, LOGIN_FAILED).await;
                false
            }
        };

        self.finish().await;
        ok
    }

    /// Create an account and log straight into it.
    pub async fn register(&self, username: &str, password: &str, email: Option<&str>) -> bool {
        self.begin().await;

        let ok = match self.api.register(username, password, email).await {
            Ok(user) => {
                info!("Registered account {}", user.username);
                self.login(username, password).await
            }
            Err(e) => {
                debug!("Registration failed: {}", e);
                self.fail(&e, REGISTRATION_FAILED).await;
                false
            }
        };

        self.finish().await;
        ok
    }

    /// Load the user record for the current token. A rejected token logs out.
    pub async fn fetch_user(&self) {
        if self.read().await.token.is_none() {
            self.state.write().await.user = None;
            return;
        }

        match self.api.get_me().await {
            Ok(user) => self.state.write().await.user = Some(user),
            Err(e) => {
                warn!("Could not resolve current user, logging out: {}", e);
                self.logout().await;
            }
        }
    }

    /// Change email or password of the current user.
    pub async fn update_profile(&self, update: &UpdateUserRequest) -> bool {
        self.begin().await;

        let ok = match self.api.update_me(update).await {
            Ok(user) => {
                self.state.write().await.user = Some(user);
                true
            }
            Err(e) => {
                self.fail(&e, UPDATE_FAILED).await;
                false
            }
        };

        self.finish().await;
        ok
    }

    /// Forget the token and user, in memory and in persistent storage.
    pub async fn logout(&self) {
        {
            let mut state = self.state.write().await;
            state.token = None;
            state.user = None;
        }
        if let Err(e) = self.tokens.remove() {
            warn!("Failed to clear stored session token: {}", e);
        }
        info!("Logged out");
    }

    /// Whether any accounts exist. Never fails: errors read as "no accounts".
    pub async fn check_auth_status(&self) -> AuthStatus {
        match self.api.get_auth_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!("Auth status check failed, assuming no accounts: {}", e);
                AuthStatus::NO_ACCOUNTS
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.read().await.is_authenticated()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.read().await.user.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.read().await.token.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.read().await.error.clone()
    }

    pub async fn snapshot(&self) -> AuthState {
        self.read().await.clone()
    }

    async fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.absorb_expiry().await;
        self.state.read().await
    }

    /// Drop the in-memory session if the server rejected it since the last look.
    async fn absorb_expiry(&self) {
        let Some(expiry) = &self.expiry else {
            return;
        };

        let mut expiry = expiry.lock().await;
        if !expiry.has_changed().unwrap_or(false) {
            return;
        }
        expiry.borrow_and_update();

        let mut state = self.state.write().await;
        if state.token.is_some() || state.user.is_some() {
            info!("Session rejected by server, clearing it");
        }
        state.token = None;
        state.user = None;
    }

    async fn begin(&self) {
        self.absorb_expiry().await;
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn finish(&self) {
        self.state.write().await.loading = false;
    }

    async fn fail(&self, err: &Error, fallback: &str) {
        let message = err.detail().unwrap_or(fallback).to_string();
        self.state.write().await.error = Some(message);
    }
}
