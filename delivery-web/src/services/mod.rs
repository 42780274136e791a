//! # Browser Services
//!
//! Implementations of the [`crate::session`] collaborator traits backed by
//! the browser: HTTP via `gloo-net`, `localStorage` for the token, an
//! in-process event bus and the router's navigate function.
//!
//! ```text
//! services/
//! ├── mod.rs        - Module exports
//! ├── auth.rs       - HttpAuthService (server logout)
//! ├── token.rs      - LocalTokenStore (localStorage)
//! ├── events.rs     - TokenEventBus (session-expiry broadcast)
//! └── navigator.rs  - RouterNavigator (leptos_router)
//! ```

pub mod auth;
pub mod events;
pub mod navigator;
pub mod token;

pub use auth::HttpAuthService;
pub use events::{SubscriptionId, TokenEventBus};
pub use navigator::{RouterNavigator, use_router_navigator};
pub use token::LocalTokenStore;
