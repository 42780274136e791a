//! Authentication state management

use leptos::prelude::*;

use crate::services::TokenEventBus;
use crate::session::{AuthStatusProvider, TokenEventKind, TokenService};

/// Global auth context
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub authorized: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(authorized: bool) -> Self {
        Self {
            authorized: RwSignal::new(authorized),
        }
    }

    pub fn set_authorized(&self, authorized: bool) {
        self.authorized.set(authorized);
    }
}

impl AuthStatusProvider for AuthContext {
    fn is_authorized(&self) -> bool {
        self.authorized.get()
    }
}

/// Seed the flag from the stored token and drop it whenever the session
/// expires anywhere in the app.
pub fn provide_auth_context(tokens: &impl TokenService) -> AuthContext {
    let context = AuthContext::new(tokens.token().is_some());
    log::info!("Session restored: {}", context.authorized.get_untracked());

    let subscription = TokenEventBus::global().subscribe(TokenEventKind::Expired, move |event| {
        log::info!("Session ended: {}", event.reason);
        context.set_authorized(false);
    });
    on_cleanup(move || {
        TokenEventBus::global().unsubscribe(subscription);
    });

    provide_context(context);
    context
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionError, TokenEvents};
    use async_trait::async_trait;

    struct StoredToken(Option<&'static str>);

    #[async_trait(?Send)]
    impl TokenService for StoredToken {
        async fn save_token(&self, _token: Option<String>) -> Result<(), SessionError> {
            Ok(())
        }

        fn token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_flag_follows_stored_token() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(provide_auth_context(&StoredToken(Some("jwt"))).is_authorized());
            assert!(!provide_auth_context(&StoredToken(None)).is_authorized());
        });
    }

    #[test]
    fn test_expired_event_clears_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let context = provide_auth_context(&StoredToken(Some("jwt")));
            assert!(use_auth().is_authorized());

            TokenEventBus::global().dispatch(TokenEventKind::Expired, "User logged out");

            assert!(!context.is_authorized());
        });
    }
}
