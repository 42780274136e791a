//! Application state

pub mod auth;

pub use auth::{AuthContext, provide_auth_context, use_auth};
