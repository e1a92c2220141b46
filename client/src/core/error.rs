//! # Common Error Types
//!
//! Consolidated error handling for the wallet client.
//!
//! Every repository operation resolves to `Result<_, WalletError>`; no
//! transport error crosses the repository boundary untranslated, and
//! screens never see anything but this type.
//!
//! ## Error Categories
//!
//! - **Validation**: input rejected before any network call; always shown
//!   inline on the originating field, never as a toast
//! - **Timeout**: the transport's own timeout elapsed; fixed user-facing
//!   message, recoverable by retry
//! - **Status**: the server answered with a non-success code; the numeric
//!   code is preserved for display ("Registration failed (404)")
//! - **Unknown**: catch-all wrapping the underlying error text

use std::fmt;
use thiserror::Error;

/// The user action an error is reported against.
///
/// Supplies the action-specific prefix of the rendered message, so the
/// failure translation lives in one place instead of per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    LoadWallet,
    AddCard,
    ApplyPromo,
    UpdatePaymentMethod,
}

impl Operation {
    /// User-facing label used as the message prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Register => "Registration",
            Operation::LoadWallet => "Loading wallet data",
            Operation::AddCard => "Adding the card",
            Operation::ApplyPromo => "Applying the promo code",
            Operation::UpdatePaymentMethod => "Updating the payment method",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type surfaced by the repository to the screens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// Input rejected locally; never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The transport timed out. Retrying later may succeed.
    #[error("Connection to the server timed out. Try again later.")]
    Timeout,

    /// The server answered with a non-success status code.
    #[error("{operation} failed ({code})")]
    Status { operation: Operation, code: u16 },

    /// Anything else the transport reported.
    #[error("{operation} failed ({detail})")]
    Unknown { operation: Operation, detail: String },
}
