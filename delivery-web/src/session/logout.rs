//! # Logout Flow
//!
//! The logout sequence run from the profile dropdown:
//!
//! 1. end the server session
//! 2. clear the stored token
//! 3. broadcast [`TokenEventKind::Expired`]
//! 4. return to the menu
//!
//! Every step runs even when an earlier one fails, so a dead backend cannot
//! leave the browser holding a token. The first failure is returned.

use super::{
    AuthService, LOGOUT_REASON, Navigator, SessionError, TokenEventKind, TokenEvents, TokenService,
};
use crate::routes::DISHES_URL;

pub struct LogoutFlow<A, T, E, N> {
    auth: A,
    tokens: T,
    events: E,
    navigator: N,
}

impl<A, T, E, N> LogoutFlow<A, T, E, N>
where
    A: AuthService,
    T: TokenService,
    E: TokenEvents,
    N: Navigator,
{
    pub fn new(auth: A, tokens: T, events: E, navigator: N) -> Self {
        Self {
            auth,
            tokens,
            events,
            navigator,
        }
    }

    pub async fn run(&self) -> Result<(), SessionError> {
        log::info!("Logging out");
        let mut first_error = None;

        if let Err(e) = self.auth.logout().await {
            log::warn!("Server logout failed: {}", e);
            first_error.get_or_insert(e);
        }

        if let Err(e) = self.tokens.save_token(None).await {
            log::error!("Failed to clear token: {}", e);
            first_error.get_or_insert(e);
        }

        self.events.dispatch(TokenEventKind::Expired, LOGOUT_REASON);
        self.navigator.navigate(DISHES_URL);

        match first_error {
            Some(e) => Err(e),
            None => {
                log::info!("Logged out");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Logout,
        SaveToken(Option<String>),
        Dispatch(TokenEventKind, String),
        Navigate(String),
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct MockAuth {
        log: CallLog,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl AuthService for MockAuth {
        async fn logout(&self) -> Result<(), SessionError> {
            self.log.borrow_mut().push(Call::Logout);
            if self.fail {
                Err(SessionError::Network("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct MockTokens {
        log: CallLog,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl TokenService for MockTokens {
        async fn save_token(&self, token: Option<String>) -> Result<(), SessionError> {
            self.log.borrow_mut().push(Call::SaveToken(token));
            if self.fail {
                Err(SessionError::Storage("quota exceeded".to_string()))
            } else {
                Ok(())
            }
        }

        fn token(&self) -> Option<String> {
            None
        }
    }

    struct MockEvents(CallLog);

    impl TokenEvents for MockEvents {
        fn dispatch(&self, kind: TokenEventKind, reason: &str) {
            self.0.borrow_mut().push(Call::Dispatch(kind, reason.to_string()));
        }
    }

    struct MockNavigator(CallLog);

    impl Navigator for MockNavigator {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(Call::Navigate(path.to_string()));
        }
    }

    fn flow(
        log: &CallLog,
        auth_fails: bool,
        storage_fails: bool,
    ) -> LogoutFlow<MockAuth, MockTokens, MockEvents, MockNavigator> {
        LogoutFlow::new(
            MockAuth { log: log.clone(), fail: auth_fails },
            MockTokens { log: log.clone(), fail: storage_fails },
            MockEvents(log.clone()),
            MockNavigator(log.clone()),
        )
    }

    fn expected_calls() -> Vec<Call> {
        vec![
            Call::Logout,
            Call::SaveToken(None),
            Call::Dispatch(TokenEventKind::Expired, "User logged out".to_string()),
            Call::Navigate(DISHES_URL.to_string()),
        ]
    }

    #[tokio::test]
    async fn test_logout_calls_collaborators_in_order() {
        let log = CallLog::default();

        let result = flow(&log, false, false).run().await;

        assert_eq!(result, Ok(()));
        assert_eq!(*log.borrow(), expected_calls());
    }

    #[tokio::test]
    async fn test_failed_server_logout_still_clears_session() {
        let log = CallLog::default();

        let result = flow(&log, true, false).run().await;

        assert_eq!(
            result,
            Err(SessionError::Network("connection refused".to_string()))
        );
        assert_eq!(*log.borrow(), expected_calls());
    }

    #[tokio::test]
    async fn test_first_error_wins() {
        let log = CallLog::default();

        let result = flow(&log, true, true).run().await;

        assert!(matches!(result, Err(SessionError::Network(_))));
        assert_eq!(log.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_storage_failure_reported() {
        let log = CallLog::default();

        let result = flow(&log, false, true).run().await;

        assert_eq!(result, Err(SessionError::Storage("quota exceeded".to_string())));
        assert_eq!(*log.borrow(), expected_calls());
    }
}
