//! # Phone Entry Screen
//!
//! Registration screen: collects a phone number, validates the format
//! locally, and registers the user. Success hands off to the wallet
//! screen through a one-shot effect.

use crate::app::effects::EffectQueue;
use crate::services::repository::WalletRepository;
use crate::utils::validation::{validate_phone, PHONE_PREFIX};
use std::sync::Arc;

/// View state: an immutable snapshot replaced wholesale on every
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEntryState {
    pub phone_number: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for PhoneEntryState {
    fn default() -> Self {
        Self {
            // Pre-filled with the country code so the user types the rest
            phone_number: PHONE_PREFIX.to_string(),
            is_loading: false,
            error: None,
        }
    }
}

/// One-shot outcomes of this screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEntryEffect {
    NavigateToWallet,
}

/// Phone-entry state machine: `idle -> submitting -> (success | failed)`.
pub struct PhoneEntryScreen {
    repository: Arc<WalletRepository>,
    state: PhoneEntryState,
    effects: EffectQueue<PhoneEntryEffect>,
}

impl PhoneEntryScreen {
    pub fn new(repository: Arc<WalletRepository>) -> Self {
        Self {
            repository,
            state: PhoneEntryState::default(),
            effects: EffectQueue::new(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &PhoneEntryState {
        &self.state
    }

    /// Remove and return the oldest pending effect.
    pub fn poll_effect(&mut self) -> Option<PhoneEntryEffect> {
        self.effects.pop()
    }

    /// Raw keystrokes: keep digits and `+` only, clear any stale error.
    pub fn on_phone_changed(&mut self, input: &str) {
        let filtered: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        self.state = PhoneEntryState {
            phone_number: filtered,
            error: None,
            ..self.state.clone()
        };
    }

    /// Submit the phone number.
    ///
    /// A malformed number is rejected inline without a network call.
    /// Re-entrant submits while one is in flight are ignored.
    pub async fn submit_phone(&mut self) {
        if self.state.is_loading {
            return;
        }

        let phone = self.state.phone_number.clone();
        let check = validate_phone(&phone);
        if !check.is_valid {
            self.state = PhoneEntryState {
                error: check.error,
                ..self.state.clone()
            };
            return;
        }

        self.state = PhoneEntryState {
            is_loading: true,
            error: None,
            ..self.state.clone()
        };

        match self.repository.register(&phone).await {
            Ok(()) => {
                self.state = PhoneEntryState {
                    is_loading: false,
                    ..self.state.clone()
                };
                self.effects.push(PhoneEntryEffect::NavigateToWallet);
            }
            Err(err) => {
                self.state = PhoneEntryState {
                    is_loading: false,
                    error: Some(err.to_string()),
                    ..self.state.clone()
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ApiError;
    use crate::services::session::MemorySessionStore;
    use crate::testutil::MockWalletApi;

    fn screen(api: MockWalletApi) -> (PhoneEntryScreen, Arc<MockWalletApi>) {
        let api = Arc::new(api);
        let session = Arc::new(MemorySessionStore::new());
        let repo = Arc::new(WalletRepository::new(api.clone(), session));
        (PhoneEntryScreen::new(repo), api)
    }

    #[test]
    fn test_initial_state_has_country_prefix() {
        let (screen, _) = screen(MockWalletApi::new());

        assert_eq!(screen.state().phone_number, "+998");
        assert!(!screen.state().is_loading);
        assert_eq!(screen.state().error, None);
    }

    #[test]
    fn test_phone_input_keeps_digits_and_plus_only() {
        let (mut screen, _) = screen(MockWalletApi::new());

        screen.on_phone_changed("+998 (90) 123-45-67");

        assert_eq!(screen.state().phone_number, "+998901234567");
    }

    #[tokio::test]
    async fn test_submit_rejects_short_number_without_network_call() {
        let (mut screen, api) = screen(MockWalletApi::new());

        screen.on_phone_changed("+99890123456"); // 12 chars
        screen.submit_phone().await;

        assert!(screen.state().error.is_some());
        assert!(!screen.state().is_loading);
        assert!(api.register_calls().is_empty());
        assert_eq!(screen.poll_effect(), None);
    }

    #[tokio::test]
    async fn test_submit_success_navigates_once() {
        let api = MockWalletApi::new();
        api.script_register(Ok(()));
        let (mut screen, api) = screen(api);

        screen.on_phone_changed("+998901234567");
        screen.submit_phone().await;

        assert_eq!(screen.state().error, None);
        assert!(!screen.state().is_loading);
        assert_eq!(api.register_calls(), vec!["+998901234567".to_string()]);
        assert_eq!(screen.poll_effect(), Some(PhoneEntryEffect::NavigateToWallet));
        // One-shot: a second observer sees nothing
        assert_eq!(screen.poll_effect(), None);
    }

    #[tokio::test]
    async fn test_submit_failure_shows_error_and_stays() {
        let api = MockWalletApi::new();
        api.script_register(Err(ApiError::Status(500)));
        let (mut screen, _) = screen(api);

        screen.on_phone_changed("+998901234567");
        screen.submit_phone().await;

        assert_eq!(
            screen.state().error.as_deref(),
            Some("Registration failed (500)")
        );
        assert!(!screen.state().is_loading);
        assert_eq!(screen.poll_effect(), None);
    }

    #[tokio::test]
    async fn test_error_clears_on_next_keystroke() {
        let api = MockWalletApi::new();
        api.script_register(Err(ApiError::Timeout));
        let (mut screen, _) = screen(api);

        screen.on_phone_changed("+998901234567");
        screen.submit_phone().await;
        assert!(screen.state().error.is_some());

        screen.on_phone_changed("+9989012345678");
        assert_eq!(screen.state().error, None);
    }
}
