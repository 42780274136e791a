//! # Backend API Paths
//!
//! Endpoint paths relative to the API base URL. The base URL itself is
//! configured by each client.

/// Invalidate the current session on the server.
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "Authorization";

/// Build the value of [`AUTH_HEADER`] for a session token.
///
/// ```rust
/// use shared::api::bearer;
///
/// assert_eq!(bearer("abc"), "Bearer abc");
/// ```
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
