//! # Wallet Endpoints
//!
//! Wallet summary and active payment-method updates.

use super::client::ApiClient;
use super::ApiError;
use shared::{UpdatePaymentMethodRequest, WalletResponse};

/// Fetch the wallet summary (`GET /wallet`).
pub async fn fetch_wallet(client: &ApiClient) -> Result<WalletResponse, ApiError> {
    let response = client
        .identified(client.client.get(client.url("/wallet")))
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(response.json::<WalletResponse>().await?)
    } else {
        tracing::warn!(status = status.as_u16(), "wallet fetch rejected");
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Switch the active payment method (`PUT /wallet/method`).
pub async fn set_active_payment_method(
    client: &ApiClient,
    active_method: &str,
    active_card_id: Option<i64>,
) -> Result<(), ApiError> {
    let request = UpdatePaymentMethodRequest {
        active_method: active_method.to_string(),
        active_card_id,
    };

    let response = client
        .identified(client.client.put(client.url("/wallet/method")))
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!(method = %request.active_method, card_id = ?request.active_card_id, "payment method updated");
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "payment method update rejected");
        Err(ApiError::Status(status.as_u16()))
    }
}
