//! Application configuration

/// Backend API base URL used when `DELIVERY_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3001";

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "delivery.token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub token_key: String,
}

impl AppConfig {
    /// Build the configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("DELIVERY_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base,
            token_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }

    /// Join an API path (e.g. `/api/auth/logout`) onto the base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.token_key, TOKEN_STORAGE_KEY);
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = AppConfig::with_api_base(Some("https://api.example.com/"));
        assert_eq!(
            config.api_url(shared::api::LOGOUT_PATH),
            "https://api.example.com/api/auth/logout"
        );
    }

    #[test]
    fn test_blank_override_falls_back() {
        let config = AppConfig::with_api_base(Some("   "));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
