//! # Wallet Client - Library Root
//!
//! Client core for a phone-number wallet: registration, cash balance,
//! saved cards, promo codes and payment-method switching against a
//! remote REST backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 app (screens)                 │
//! │  PhoneEntryScreen · WalletScreen · AddCard    │
//! │  intents in → state snapshot + one-shot       │
//! │  effects out                                  │
//! ├───────────────────────────────────────────────┤
//! │           services::repository                │
//! │  concurrent fetch join · DTO → domain ·       │
//! │  failure translation · session write          │
//! ├──────────────────────┬────────────────────────┤
//! │   services::api      │   services::session    │
//! │   (reqwest, typed)   │   (phone-number store) │
//! └──────────────────────┴────────────────────────┘
//!            │ HTTP (JSON, identity header)
//!            ▼
//!     Wallet backend (remote collaborator)
//! ```
//!
//! ## Module Structure
//!
//! - **app**: screen state machines and the one-shot effect queues.
//!   Each user intent produces exactly one new state snapshot plus zero
//!   or one effect (navigation, toast).
//! - **core**: the error taxonomy, the [`core::service::WalletApi`]
//!   trait used for dependency injection, and the wallet domain model.
//! - **services**: the typed HTTP client, the session store, and the
//!   repository the screens are constructed over.
//! - **utils**: pure input masks with invertible cursor mapping, and
//!   phone/expiry business validation.
//!
//! ## Core Concepts
//!
//! State is observed only as immutable snapshots: every transition
//! replaces the whole view-state value, so observers never see a
//! half-applied update. Navigation and toasts travel through per-screen
//! effect queues with at-most-once delivery, so re-observing state after
//! a resume never replays them.
//!
//! Payment-method switching is pessimistic: after a successful update
//! the wallet is reloaded in full, so the displayed active method always
//! reflects server truth.

pub mod app;
pub mod core;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types for convenience
pub use crate::app::{
    AddCardScreen, PhoneEntryScreen, Screen, WalletEffect, WalletScreen, WalletScreenState,
};
pub use crate::core::{Card, PaymentMethod, WalletApi, WalletData, WalletError};
pub use crate::services::{
    ApiClient, FileSessionStore, MemorySessionStore, SessionStore, WalletRepository,
};
