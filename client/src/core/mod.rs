//! # Core Types
//!
//! App-wide types shared by the service layer and the screens:
//!
//! - [`error`]: the error taxonomy surfaced to screens
//! - [`model`]: the wallet domain model (payment methods, wallet snapshot)
//! - [`service`]: the API service trait used for dependency injection

pub mod error;
pub mod model;
pub mod service;

pub use error::{Operation, WalletError};
pub use model::{Card, PaymentMethod, WalletData};
pub use service::WalletApi;
