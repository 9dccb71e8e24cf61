//! Per-navigation access check

use std::sync::Arc;

use log::{debug, warn};

use super::{RouteDescriptor, RouteName};
use crate::session::TokenStore;
use crate::store::AuthStore;

/// Outcome of the guard for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(RouteName),
}

/// Decides whether a route may be entered
///
/// Presence of a stored token is the only client-side session check. Whether
/// the token is still valid is left to the server: the first protected call
/// answered with 401 ends the session.
pub struct NavigationGuard {
    auth: Arc<AuthStore>,
    tokens: Arc<dyn TokenStore>,
}

impl NavigationGuard {
    pub fn new(auth: Arc<AuthStore>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { auth, tokens }
    }

    pub async fn before_each(&self, target: &RouteDescriptor) -> NavigationDecision {
        let has_token = self.has_token();

        if target.public {
            let entry_view = matches!(target.name, RouteName::Login | RouteName::Register);
            if has_token && entry_view {
                debug!("Already signed in, skipping {}", target.path);
                return NavigationDecision::Redirect(RouteName::Dashboard);
            }
            return NavigationDecision::Allow;
        }

        if has_token {
            return NavigationDecision::Allow;
        }

        let status = self.auth.check_auth_status().await;
        let destination = if status.has_users {
            RouteName::Login
        } else {
            RouteName::Register
        };
        debug!("No session for {}, redirecting to {:?}", target.path, destination);
        NavigationDecision::Redirect(destination)
    }

    fn has_token(&self) -> bool {
        match self.tokens.get() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!("Could not read session token, treating as signed out: {}", e);
                false
            }
        }
    }
}
