//! # Wallet Repository
//!
//! Orchestration layer between the screens and the backend: runs the
//! concurrent wallet+cards fetch, maps wire DTOs into domain entities,
//! persists the session on successful registration, and translates every
//! transport failure into a user-facing [`WalletError`]. Nothing throws
//! past this boundary; screens only ever see explicit results.

use crate::core::error::{Operation, WalletError};
use crate::core::model::{Card, PaymentMethod, WalletData};
use crate::core::service::WalletApi;
use crate::services::api::ApiError;
use crate::services::session::SessionStore;
use std::sync::Arc;

/// Repository the screen state machines are constructed over.
///
/// Both collaborators are injected explicitly; the repository holds no
/// global state of its own.
pub struct WalletRepository {
    api: Arc<dyn WalletApi>,
    session: Arc<dyn SessionStore>,
}

impl WalletRepository {
    pub fn new(api: Arc<dyn WalletApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Whether a session phone number is persisted.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The persisted session phone number, if any.
    pub fn phone_number(&self) -> Option<String> {
        self.session.phone()
    }

    /// Register the user and persist the session.
    ///
    /// This is the only place the session is ever written.
    pub async fn register(&self, phone: &str) -> Result<(), WalletError> {
        match self.api.register_user(phone).await {
            Ok(()) => {
                self.session
                    .set_phone(phone)
                    .map_err(|err| WalletError::Unknown {
                        operation: Operation::Register,
                        detail: err.to_string(),
                    })?;
                tracing::info!("user registered and session persisted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                Err(translate(Operation::Register, err))
            }
        }
    }

    /// Fetch the wallet summary and card list concurrently and join them
    /// into one snapshot.
    ///
    /// Either call failing fails the whole operation; no partial wallet
    /// state is ever returned.
    pub async fn fetch_wallet_data(&self) -> Result<WalletData, WalletError> {
        let (wallet, card_items) =
            tokio::try_join!(self.api.fetch_wallet(), self.api.fetch_cards()).map_err(|err| {
                tracing::error!(error = %err, "wallet fetch failed");
                translate(Operation::LoadWallet, err)
            })?;

        let cards: Vec<Card> = card_items.into_iter().map(Card::from).collect();
        Ok(WalletData::resolve(
            wallet.balance,
            cards,
            &wallet.active_method,
            wallet.active_card_id,
        ))
    }

    /// Save a new card. Non-digits are stripped from the number here;
    /// the expiry must already be formatted `MM/YY` by the caller.
    pub async fn add_card(&self, number: &str, expiry: &str) -> Result<(), WalletError> {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();

        self.api.add_card(&digits, expiry).await.map_err(|err| {
            tracing::warn!(error = %err, "add card failed");
            translate(Operation::AddCard, err)
        })
    }

    /// Apply a promo code.
    pub async fn apply_promo_code(&self, code: &str) -> Result<(), WalletError> {
        self.api.apply_promo_code(code).await.map_err(|err| {
            tracing::warn!(error = %err, "promo code failed");
            translate(Operation::ApplyPromo, err)
        })
    }

    /// Switch the active payment method.
    ///
    /// [`PaymentMethod::Unknown`] is rejected locally without a remote
    /// call, since switching to an unresolved method is meaningless.
    pub async fn update_payment_method(&self, method: &PaymentMethod) -> Result<(), WalletError> {
        let (tag, card_id) = match method {
            PaymentMethod::Cash => ("cash", None),
            PaymentMethod::Card(card) => ("card", Some(card.id)),
            PaymentMethod::Unknown => {
                return Err(WalletError::Validation(
                    "This payment method cannot be selected.".to_string(),
                ))
            }
        };

        self.api
            .set_active_payment_method(tag, card_id)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "payment method update failed");
                translate(Operation::UpdatePaymentMethod, err)
            })
    }
}

/// The single failure-translation policy for every repository operation.
fn translate(operation: Operation, err: ApiError) -> WalletError {
    match err {
        ApiError::Timeout => WalletError::Timeout,
        ApiError::Status(code) => WalletError::Status { operation, code },
        ApiError::Network(detail) => WalletError::Unknown { operation, detail },
    }
}
