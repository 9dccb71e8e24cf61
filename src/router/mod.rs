//! Route table and guarded navigation
//!
//! Every view the application can show is a [`RouteDescriptor`] in [`ROUTES`].
//! [`Router::navigate`] resolves a path against the table, asks the
//! [`NavigationGuard`] whether it may be entered and follows any redirects
//! before committing the new [`Location`].

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::error::{NavigationError, Result};
use crate::session::TokenStore;
use crate::store::AuthStore;

mod guard;
mod location;

pub use guard::{NavigationDecision, NavigationGuard};
pub use location::{HISTORY_LIMIT, Location, NavigationKind, Visit};

use location::strip_query;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/";

/// Redirects followed in one navigation before giving up
const MAX_REDIRECTS: usize = 10;

/// Named views. Declared in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Register,
    PublicItem,
    Dashboard,
    Items,
    AddItem,
    ItemDetail,
    Locations,
    Categories,
    Properties,
    PropertyDetail,
    Settings,
    Setup,
    Profile,
}

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: RouteName,
    /// Pattern; `:name` segments capture parameters
    pub path: &'static str,
    /// Reachable without a session
    pub public: bool,
}

const fn public(name: RouteName, path: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        name,
        path,
        public: true,
    }
}

const fn private(name: RouteName, path: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        name,
        path,
        public: false,
    }
}

/// The route table. `/items/add` precedes `/items/:id` so the static
/// segment wins.
pub static ROUTES: [RouteDescriptor; 14] = [
    public(RouteName::Login, LOGIN_PATH),
    public(RouteName::Register, REGISTER_PATH),
    public(RouteName::PublicItem, "/public/items/:id"),
    private(RouteName::Dashboard, DASHBOARD_PATH),
    private(RouteName::Items, "/items"),
    private(RouteName::AddItem, "/items/add"),
    private(RouteName::ItemDetail, "/items/:id"),
    private(RouteName::Locations, "/locations"),
    private(RouteName::Categories, "/categories"),
    private(RouteName::Properties, "/properties"),
    private(RouteName::PropertyDetail, "/properties/:id"),
    private(RouteName::Settings, "/settings"),
    private(RouteName::Setup, "/setup"),
    private(RouteName::Profile, "/profile"),
];

/// Look up a route by name
pub fn route(name: RouteName) -> &'static RouteDescriptor {
    &ROUTES[name as usize]
}

/// A concrete path resolved against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDescriptor,
    /// The path as requested, query string included
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn name(&self) -> RouteName {
        self.route.name
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Resolve a path to the first matching route. Query strings, fragments and
/// trailing slashes are ignored.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let wanted = segments(strip_query(path));

    ROUTES.iter().find_map(|route| {
        let pattern = segments(route.path);
        if pattern.len() != wanted.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (p, w) in pattern.iter().zip(&wanted) {
            match p.strip_prefix(':') {
                Some(key) => {
                    params.insert(key.to_string(), w.to_string());
                }
                None if p == w => {}
                None => return None,
            }
        }

        Some(RouteMatch {
            route,
            path: path.to_string(),
            params,
        })
    })
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Guarded navigation over the shared [`Location`]
pub struct Router {
    guard: NavigationGuard,
    location: Arc<Location>,
    auth: Arc<AuthStore>,
}

impl Router {
    pub fn new(auth: Arc<AuthStore>, tokens: Arc<dyn TokenStore>, location: Arc<Location>) -> Self {
        Self {
            guard: NavigationGuard::new(auth.clone(), tokens),
            location,
            auth,
        }
    }

    pub fn location(&self) -> &Arc<Location> {
        &self.location
    }

    pub fn auth(&self) -> &Arc<AuthStore> {
        &self.auth
    }

    /// Route for the current location, which may have been changed by a hard
    /// navigation outside the router.
    pub fn current(&self) -> Option<RouteMatch> {
        resolve(&self.location.path())
    }

    /// Restore any stored session, then run the guard on the initial location.
    pub async fn start(&self) -> Result<RouteMatch> {
        self.auth.initialize().await;
        let initial = self.location.path();
        self.navigate(&initial).await
    }

    /// Navigate to a named route without parameters
    pub async fn push(&self, name: RouteName) -> Result<RouteMatch> {
        self.navigate(route(name).path).await
    }

    /// Navigate to `path`, following guard redirects.
    ///
    /// The location only changes once a route is allowed; navigating to the
    /// current path records nothing.
    pub async fn navigate(&self, path: &str) -> Result<RouteMatch> {
        let mut target = path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            let matched =
                resolve(&target).ok_or_else(|| NavigationError::NotFound(target.clone()))?;

            match self.guard.before_each(matched.route).await {
                NavigationDecision::Allow => {
                    if self.location.path() != target {
                        debug!("Navigating to {}", target);
                        self.location.push(target);
                    }
                    return Ok(matched);
                }
                NavigationDecision::Redirect(name) => {
                    debug!("Redirecting {} -> {:?}", target, name);
                    target = route(name).path.to_string();
                }
            }
        }

        Err(NavigationError::RedirectLoop(path.to_string()).into())
    }
}
