//! # Screen State Machines
//!
//! One state machine per screen. Each holds an immutable view-state
//! snapshot, accepts user intents, calls into the repository and the
//! input validators, and emits one-shot effects through its own
//! [`effects::EffectQueue`]. Intents are processed one at a time per
//! screen; the only suspension points are the network calls inside the
//! repository.

pub mod add_card;
pub mod effects;
pub mod phone_entry;
pub mod wallet;

pub use add_card::{AddCardEffect, AddCardScreen, AddCardState};
pub use effects::EffectQueue;
pub use phone_entry::{PhoneEntryEffect, PhoneEntryScreen, PhoneEntryState};
pub use wallet::{WalletEffect, WalletScreen, WalletScreenState};

use crate::services::session::SessionStore;

/// Top-level screens of the wallet flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    PhoneEntry,
    Wallet,
    AddCard,
}

impl Screen {
    /// Start destination: a persisted session skips phone entry.
    pub fn initial(session: &dyn SessionStore) -> Self {
        if session.is_logged_in() {
            Screen::Wallet
        } else {
            Screen::PhoneEntry
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::PhoneEntry => "Sign Up",
            Screen::Wallet => "My Wallet",
            Screen::AddCard => "Add Card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::MemorySessionStore;

    #[test]
    fn test_initial_screen_without_session_is_phone_entry() {
        let session = MemorySessionStore::new();
        assert_eq!(Screen::initial(&session), Screen::PhoneEntry);
    }

    #[test]
    fn test_initial_screen_with_session_is_wallet() {
        let session = MemorySessionStore::with_phone("+998901234567");
        assert_eq!(Screen::initial(&session), Screen::Wallet);
    }
}
