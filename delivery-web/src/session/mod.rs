//! # Session Collaborators
//!
//! Traits for the capabilities the navigation bar needs: reading the auth
//! flag, changing route, ending the server session, clearing the stored
//! token and announcing that the session ended. Browser implementations
//! live in [`crate::services`]; tests substitute recording mocks.
//!
//! Futures are `!Send` in the browser, hence `?Send` on every async trait.

pub mod error;
pub mod logout;

pub use error::SessionError;
pub use logout::LogoutFlow;

use async_trait::async_trait;

/// Reads whether the visitor currently has a session
pub trait AuthStatusProvider {
    fn is_authorized(&self) -> bool;
}

/// Changes the current route
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Server-side session operations
#[async_trait(?Send)]
pub trait AuthService {
    /// End the session on the server.
    async fn logout(&self) -> Result<(), SessionError>;
}

/// Client-side token persistence
#[async_trait(?Send)]
pub trait TokenService {
    /// Store `token`, or clear the stored token when `None`.
    async fn save_token(&self, token: Option<String>) -> Result<(), SessionError>;

    fn token(&self) -> Option<String>;
}

/// Kinds of token lifecycle events broadcast across the app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenEventKind {
    Expired,
}

impl TokenEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenEventKind::Expired => "expired",
        }
    }
}

impl std::fmt::Display for TokenEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason broadcast with [`TokenEventKind::Expired`] when the user logs out.
pub const LOGOUT_REASON: &str = "User logged out";

/// A dispatched token event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEvent {
    pub kind: TokenEventKind,
    pub reason: String,
}

/// Process-wide publisher of token events
pub trait TokenEvents {
    fn dispatch(&self, kind: TokenEventKind, reason: &str);
}
