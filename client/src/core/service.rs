//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::services::api::ApiError;
use async_trait::async_trait;
use shared::{CardItem, WalletResponse};

/// Trait covering the six wallet backend operations.
///
/// The repository is constructed over this trait so tests can script a
/// mock backend; [`crate::services::api::ApiClient`] is the production
/// implementation. Each operation is a single request, with no retries or
/// client-side caching.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// Register a user by phone number. Status-only result; the wallet is
    /// read separately. The only call that omits the identity header.
    async fn register_user(&self, phone: &str) -> Result<(), ApiError>;

    /// Fetch the wallet summary (balance, active-method tag, active card id).
    async fn fetch_wallet(&self) -> Result<WalletResponse, ApiError>;

    /// Fetch the ordered list of saved cards.
    async fn fetch_cards(&self) -> Result<Vec<CardItem>, ApiError>;

    /// Save a new card. `number` is digits only, `expire_date` is `MM/YY`.
    async fn add_card(&self, number: &str, expire_date: &str) -> Result<(), ApiError>;

    /// Apply a promo code to the wallet.
    async fn apply_promo_code(&self, code: &str) -> Result<(), ApiError>;

    /// Switch the active payment method (`"cash"` or `"card"` + id).
    async fn set_active_payment_method(
        &self,
        active_method: &str,
        active_card_id: Option<i64>,
    ) -> Result<(), ApiError>;
}
