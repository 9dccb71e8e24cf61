//! Application state shared across views

mod auth;

pub use auth::{AuthState, AuthStore};
