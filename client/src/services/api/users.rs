//! # User Endpoints
//!
//! User registration. This is the one call that must not carry the
//! identity header: the server has no identity for the caller yet.

use super::client::ApiClient;
use super::ApiError;
use shared::CreateUserRequest;

/// Register a user by phone number (`POST /users`).
#[tracing::instrument(skip(client))]
pub async fn register_user(client: &ApiClient, phone: &str) -> Result<(), ApiError> {
    let request = CreateUserRequest {
        phone: phone.to_string(),
    };

    let response = client
        .client
        .post(client.url("/users"))
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("user registered");
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "registration rejected");
        Err(ApiError::Status(status.as_u16()))
    }
}
