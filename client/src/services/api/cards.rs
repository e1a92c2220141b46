//! # Card Endpoints
//!
//! Saved-card list and card creation.

use super::client::ApiClient;
use super::ApiError;
use shared::{AddCardRequest, CardItem};

/// Fetch the ordered card list (`GET /cards`).
pub async fn fetch_cards(client: &ApiClient) -> Result<Vec<CardItem>, ApiError> {
    let response = client
        .identified(client.client.get(client.url("/cards")))
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(response.json::<Vec<CardItem>>().await?)
    } else {
        tracing::warn!(status = status.as_u16(), "card list fetch rejected");
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Save a new card (`POST /cards`). Status-only result; the stored card
/// only becomes visible through the next wallet reload.
pub async fn add_card(
    client: &ApiClient,
    number: &str,
    expire_date: &str,
) -> Result<(), ApiError> {
    let request = AddCardRequest {
        number: number.to_string(),
        expire_date: expire_date.to_string(),
    };

    let response = client
        .identified(client.client.post(client.url("/cards")))
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("card added");
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "add card rejected");
        Err(ApiError::Status(status.as_u16()))
    }
}
