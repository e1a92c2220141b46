//! # Add Card Screen
//!
//! Collects a card number and expiry date, keeps a digit-count gating
//! flag for the submit action, and re-validates the business rules at
//! submit time. A successfully saved card only appears in the wallet
//! through the next reload; this screen never builds one locally.

use crate::app::effects::EffectQueue;
use crate::services::repository::WalletRepository;
use crate::utils::format::{card_digits, expiry_digits, CARD_NUMBER_MAX_DIGITS, EXPIRY_MAX_DIGITS};
use crate::utils::validation::validate_expiry;
use chrono::Local;
use std::sync::Arc;

/// View state: an immutable snapshot replaced wholesale on every
/// transition.
///
/// `is_input_potentially_valid` is a UI-only gating flag (correct digit
/// counts); it does not imply the expiry passes the business rules,
/// which are checked only at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddCardState {
    /// Digit-only card number, at most 16 digits.
    pub card_number: String,
    /// Digit-only expiry (`MMYY`), at most 4 digits.
    pub expiry_input: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_input_potentially_valid: bool,
}

/// One-shot outcomes of this screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCardEffect {
    NavigateBack { success: bool },
}

/// Add-card state machine.
pub struct AddCardScreen {
    repository: Arc<WalletRepository>,
    state: AddCardState,
    effects: EffectQueue<AddCardEffect>,
}

impl AddCardScreen {
    pub fn new(repository: Arc<WalletRepository>) -> Self {
        Self {
            repository,
            state: AddCardState::default(),
            effects: EffectQueue::new(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &AddCardState {
        &self.state
    }

    /// Remove and return the oldest pending effect.
    pub fn poll_effect(&mut self) -> Option<AddCardEffect> {
        self.effects.pop()
    }

    /// Raw card-number keystrokes: digits only, truncated to 16.
    pub fn on_card_number_changed(&mut self, input: &str) {
        let digits = card_digits(input);
        let potentially_valid = Self::check_potential_validity(&digits, &self.state.expiry_input);
        self.state = AddCardState {
            card_number: digits,
            error: None,
            is_input_potentially_valid: potentially_valid,
            ..self.state.clone()
        };
    }

    /// Raw expiry keystrokes: digits only, truncated to 4.
    pub fn on_expiry_changed(&mut self, input: &str) {
        let digits = expiry_digits(input);
        let potentially_valid = Self::check_potential_validity(&self.state.card_number, &digits);
        self.state = AddCardState {
            expiry_input: digits,
            error: None,
            is_input_potentially_valid: potentially_valid,
            ..self.state.clone()
        };
    }

    /// Submit the card.
    ///
    /// Local validation failures set an inline error and never reach the
    /// network. On success the expiry is reformatted to `MM/YY` for the
    /// wire and the screen navigates back with `success = true`.
    pub async fn save_card(&mut self) {
        let card = self.state.card_number.clone();
        let expiry = self.state.expiry_input.clone();

        if !self.validate_inputs(&card, &expiry) {
            return;
        }

        let expiry_for_api = format!("{}/{}", &expiry[..2], &expiry[2..]);

        self.state = AddCardState {
            is_loading: true,
            error: None,
            ..self.state.clone()
        };

        match self.repository.add_card(&card, &expiry_for_api).await {
            Ok(()) => {
                self.state = AddCardState {
                    is_loading: false,
                    ..self.state.clone()
                };
                self.effects.push(AddCardEffect::NavigateBack { success: true });
            }
            Err(err) => {
                self.state = AddCardState {
                    is_loading: false,
                    error: Some(err.to_string()),
                    ..self.state.clone()
                };
            }
        }
    }

    /// Digit-count gate for the submit action.
    fn check_potential_validity(card: &str, expiry: &str) -> bool {
        card.len() == CARD_NUMBER_MAX_DIGITS && expiry.len() == EXPIRY_MAX_DIGITS
    }

    fn validate_inputs(&mut self, card: &str, expiry: &str) -> bool {
        if card.len() != CARD_NUMBER_MAX_DIGITS {
            self.state = AddCardState {
                error: Some("Card number must be 16 digits".to_string()),
                ..self.state.clone()
            };
            return false;
        }

        if expiry.len() != EXPIRY_MAX_DIGITS {
            self.state = AddCardState {
                error: Some("Expiry date is incomplete (MMYY)".to_string()),
                ..self.state.clone()
            };
            return false;
        }

        let check = validate_expiry(expiry, Local::now().date_naive());
        if !check.is_valid {
            self.state = AddCardState {
                error: check.error,
                ..self.state.clone()
            };
            return false;
        }

        self.state = AddCardState {
            error: None,
            ..self.state.clone()
        };
        true
    }
}
