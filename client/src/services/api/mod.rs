//! # Backend API Client
//!
//! Typed HTTP access to the wallet backend. Pure request/response
//! mapping, with no business logic, retries or caching. One module per
//! API domain:
//!
//! - [`users`]: registration
//! - [`wallet`]: wallet summary and payment-method updates
//! - [`cards`]: card list and card creation
//! - [`promo`]: promo codes
//!
//! Failures are classed into [`ApiError`]; the repository translates
//! them into user-facing [`crate::core::WalletError`] values.

use thiserror::Error;

pub mod cards;
pub mod client;
pub mod promo;
pub mod users;
pub mod wallet;

pub use client::ApiClient;

/// Transport-level failure classes, surfaced upward untranslated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The transport's connect/read timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// Non-2xx response; the numeric code is preserved for display.
    #[error("server returned status {0}")]
    Status(u16),

    /// Network failure, malformed response body, or anything else.
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
