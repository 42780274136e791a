//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the delivery web front-end and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Session and error DTOs
//! - **[`api`]**: Backend endpoint paths
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::api::LOGOUT_PATH;
//! use shared::dto::auth::ErrorResponse;
//!
//! let url = format!("{}{}", "http://127.0.0.1:3001", LOGOUT_PATH);
//! assert_eq!(url, "http://127.0.0.1:3001/api/auth/logout");
//!
//! let err: ErrorResponse = serde_json::from_str(r#"{"error":"Session not found"}"#).unwrap();
//! assert_eq!(err.error, "Session not found");
//! ```

pub mod api;
pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
