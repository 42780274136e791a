//! Session token persistence in `localStorage`

use async_trait::async_trait;
use web_sys::Storage;

use crate::session::{SessionError, TokenService};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, SessionError> {
        let window = web_sys::window().ok_or(SessionError::Unavailable("window"))?;
        window
            .local_storage()
            .map_err(SessionError::storage)?
            .ok_or(SessionError::Unavailable("localStorage"))
    }
}

#[async_trait(?Send)]
impl TokenService for LocalTokenStore {
    async fn save_token(&self, token: Option<String>) -> Result<(), SessionError> {
        let storage = Self::storage()?;
        match token {
            Some(token) => storage
                .set_item(&self.key, &token)
                .map_err(SessionError::storage),
            None => {
                log::debug!("Clearing stored token");
                storage.remove_item(&self.key).map_err(SessionError::storage)
            }
        }
    }

    fn token(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
}
