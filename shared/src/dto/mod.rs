//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the wallet client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`wallet`] - User registration, wallet summary, card and promo DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod wallet;

pub use wallet::*;
