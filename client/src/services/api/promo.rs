//! # Promo Code Endpoint

use super::client::ApiClient;
use super::ApiError;
use shared::PromoCodeRequest;

/// Apply a promo code to the wallet (`POST /promocode`).
pub async fn apply_promo_code(client: &ApiClient, code: &str) -> Result<(), ApiError> {
    let request = PromoCodeRequest {
        code: code.to_string(),
    };

    let response = client
        .identified(client.client.post(client.url("/promocode")))
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("promo code applied");
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "promo code rejected");
        Err(ApiError::Status(status.as_u16()))
    }
}
