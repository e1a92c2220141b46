//! # External Service Integrations
//!
//! - [`api`]: typed HTTP client for the wallet backend
//! - [`session`]: persisted phone-number session store
//! - [`repository`]: orchestration layer the screens talk to

pub mod api;
pub mod repository;
pub mod session;

pub use api::ApiClient;
pub use repository::WalletRepository;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
