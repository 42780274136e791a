//! # Authentication Endpoints
//!
//! Ends the server-side session.

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::api::{AUTH_HEADER, LOGOUT_PATH, bearer};
use shared::{ErrorResponse, LogoutResponse};

use crate::config::AppConfig;
use crate::session::{AuthService, SessionError, TokenService};
use crate::services::token::LocalTokenStore;

/// Backend auth client
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    config: AppConfig,
    tokens: LocalTokenStore,
}

impl HttpAuthService {
    pub fn new(config: AppConfig, tokens: LocalTokenStore) -> Self {
        Self { config, tokens }
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn logout(&self) -> Result<(), SessionError> {
        let url = self.config.api_url(LOGOUT_PATH);
        log::debug!("POST {}", url);

        let mut request = Request::post(&url);
        if let Some(token) = self.tokens.token() {
            request = request.header(AUTH_HEADER, &bearer(&token));
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Logout network error: {}", e);
            SessionError::from(e)
        })?;

        if response.ok() {
            let body = response.text().await.unwrap_or_default();
            match LogoutResponse::from_body(&body).message {
                Some(message) => log::info!("Server logout: {}", message),
                None => log::info!("Server logout: status={}", response.status()),
            }
            return Ok(());
        }

        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        log::warn!("Logout rejected: status={} error={}", status, message);

        Err(SessionError::Api { status, message })
    }
}
