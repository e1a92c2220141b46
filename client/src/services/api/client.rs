//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::service::WalletApi;
use crate::services::api::ApiError;
use crate::services::session::SessionStore;
use reqwest::{Client, RequestBuilder};
use shared::{CardItem, WalletResponse};
use std::sync::Arc;
use std::time::Duration;

/// Default base URL for the wallet backend.
pub const DEFAULT_BASE_URL: &str = "https://wallet-api.ridepay.uz";

/// Connect/read timeout applied to every request. Exceeding it surfaces
/// as [`ApiError::Timeout`]; no further timeout is layered above it.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Identity header carrying the session phone number.
pub const PHONE_HEADER: &str = "X-Account-Phone";

/// HTTP client for communicating with the wallet backend.
///
/// Holds the connection pool and the session store the identity header
/// is derived from. The store is injected at construction; the client
/// performs no ambient lookups.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client against the default backend.
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, session)
    }

    /// Create a client against a specific base URL (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the identity header to a request.
    ///
    /// Used by every operation except registration, which runs before
    /// the server knows any identity. Screens gate unauthenticated
    /// access via navigation, so a missing session here is only logged.
    pub(crate) fn identified(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.phone() {
            Some(phone) => request.header(PHONE_HEADER, phone),
            None => {
                tracing::warn!("identity header missing: no session phone persisted");
                request
            }
        }
    }
}

#[async_trait::async_trait]
impl WalletApi for ApiClient {
    async fn register_user(&self, phone: &str) -> Result<(), ApiError> {
        crate::services::api::users::register_user(self, phone).await
    }

    async fn fetch_wallet(&self) -> Result<WalletResponse, ApiError> {
        crate::services::api::wallet::fetch_wallet(self).await
    }

    async fn fetch_cards(&self) -> Result<Vec<CardItem>, ApiError> {
        crate::services::api::cards::fetch_cards(self).await
    }

    async fn add_card(&self, number: &str, expire_date: &str) -> Result<(), ApiError> {
        crate::services::api::cards::add_card(self, number, expire_date).await
    }

    async fn apply_promo_code(&self, code: &str) -> Result<(), ApiError> {
        crate::services::api::promo::apply_promo_code(self, code).await
    }

    async fn set_active_payment_method(
        &self,
        active_method: &str,
        active_card_id: Option<i64>,
    ) -> Result<(), ApiError> {
        crate::services::api::wallet::set_active_payment_method(self, active_method, active_card_id)
            .await
    }
}
