//! Current location and navigation history

use std::sync::{PoisonError, RwLock};

/// Visits kept in [`Location::history`]; older ones are dropped
pub const HISTORY_LIMIT: usize = 50;

/// How a location change happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Location at startup
    Initial,
    /// Guarded in-app navigation through the router
    Soft,
    /// Forced full navigation that bypasses the guard
    Hard,
}

/// One entry in the navigation history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub path: String,
    pub kind: NavigationKind,
}

/// The current location, shared by the router and the session-expiry handler
#[derive(Debug)]
pub struct Location {
    history: RwLock<Vec<Visit>>,
}

impl Location {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: RwLock::new(vec![Visit {
                path: initial.into(),
                kind: NavigationKind::Initial,
            }]),
        }
    }

    /// Full current path, including any query string
    pub fn path(&self) -> String {
        let history = self.history.read().unwrap_or_else(PoisonError::into_inner);
        history.last().map(|v| v.path.clone()).unwrap_or_else(|| "/".to_string())
    }

    /// Current path without query string or fragment
    pub fn pathname(&self) -> String {
        strip_query(&self.path()).to_string()
    }

    /// Record a guarded in-app navigation
    pub(crate) fn push(&self, path: impl Into<String>) {
        self.record(path.into(), NavigationKind::Soft);
    }

    /// Force a full navigation, bypassing the router guard
    pub fn assign(&self, path: impl Into<String>) {
        self.record(path.into(), NavigationKind::Hard);
    }

    /// The most recent visits, oldest first, at most [`HISTORY_LIMIT`]
    pub fn history(&self) -> Vec<Visit> {
        self.history.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, path: String, kind: NavigationKind) {
        let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
        history.push(Visit { path, kind });
        if history.len() > HISTORY_LIMIT {
            let excess = history.len() - HISTORY_LIMIT;
            history.drain(..excess);
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Drop `?query` and `#fragment` from a path
pub(crate) fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
