//! Session error type

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("{0} is not available")]
    Unavailable(&'static str),
}

impl SessionError {
    /// Convert a failed JS call into a storage error.
    pub(crate) fn storage(err: wasm_bindgen::JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        SessionError::Storage(message)
    }
}

impl From<gloo_net::Error> for SessionError {
    fn from(err: gloo_net::Error) -> Self {
        SessionError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SessionError::Api {
            status: 401,
            message: "Session not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server rejected request (401): Session not found");
        assert_eq!(
            SessionError::Unavailable("localStorage").to_string(),
            "localStorage is not available"
        );
    }
}
