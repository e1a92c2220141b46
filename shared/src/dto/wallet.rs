use serde::{Deserialize, Serialize};

/// User registration request (`POST /users`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub phone: String,
}

/// Wallet summary (`GET /wallet`)
///
/// `active_method` is a server-side tag (`"cash"` or `"card"`);
/// `active_card_id` is only meaningful for the `"card"` tag and may
/// reference a card that is no longer in the card list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletResponse {
    pub balance: f64,
    pub active_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_card_id: Option<i64>,
}

/// One saved card in the card list (`GET /cards`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardItem {
    pub id: i64,
    pub number: String,
    pub expire_date: String,
}

/// New card request (`POST /cards`)
///
/// `number` carries digits only; `expire_date` is pre-formatted `MM/YY`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddCardRequest {
    pub number: String,
    pub expire_date: String,
}

/// Promo code request (`POST /promocode`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoCodeRequest {
    pub code: String,
}

/// Active payment method update (`PUT /wallet/method`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePaymentMethodRequest {
    pub active_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_card_id: Option<i64>,
}
