//! # Wallet Screen
//!
//! The main screen: balance, saved cards, active payment method and the
//! promo-code sheet. Payment-method switching is pessimistic: a
//! successful update triggers a full reload so the displayed method
//! always reflects server truth, never an optimistic patch.

use crate::app::effects::EffectQueue;
use crate::core::model::{PaymentMethod, WalletData};
use crate::services::repository::WalletRepository;
use std::sync::Arc;

/// View state: an immutable snapshot replaced wholesale on every
/// transition. The promo-sheet sub-state is independent of the main
/// loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletScreenState {
    pub is_loading: bool,
    pub wallet_data: Option<WalletData>,
    pub error: Option<String>,
    pub is_updating_payment: bool,
    pub show_promo_sheet: bool,
    pub promo_code_input: String,
    pub promo_code_error: Option<String>,
    pub is_applying_promo: bool,
}

impl Default for WalletScreenState {
    fn default() -> Self {
        Self {
            is_loading: true,
            wallet_data: None,
            error: None,
            is_updating_payment: false,
            show_promo_sheet: false,
            promo_code_input: String::new(),
            promo_code_error: None,
            is_applying_promo: false,
        }
    }
}

/// One-shot outcomes of this screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEffect {
    NavigateToAddCard,
    ShowToast(String),
}

/// Wallet state machine.
pub struct WalletScreen {
    repository: Arc<WalletRepository>,
    state: WalletScreenState,
    effects: EffectQueue<WalletEffect>,
}

impl WalletScreen {
    /// Bare construction: loading, no data. Prefer [`WalletScreen::open`],
    /// which also performs the initial load.
    pub fn new(repository: Arc<WalletRepository>) -> Self {
        Self {
            repository,
            state: WalletScreenState::default(),
            effects: EffectQueue::new(),
        }
    }

    /// Construct the screen and run the initial load.
    pub async fn open(repository: Arc<WalletRepository>) -> Self {
        let mut screen = Self::new(repository);
        screen.load_wallet_data().await;
        screen
    }

    /// Current snapshot.
    pub fn state(&self) -> &WalletScreenState {
        &self.state
    }

    /// Remove and return the oldest pending effect.
    pub fn poll_effect(&mut self) -> Option<WalletEffect> {
        self.effects.pop()
    }

    /// Fetch the wallet snapshot.
    ///
    /// A failed refresh keeps the last-good data visible and surfaces
    /// the error inline next to it instead of blanking the screen.
    pub async fn load_wallet_data(&mut self) {
        self.state = WalletScreenState {
            is_loading: true,
            error: None,
            ..self.state.clone()
        };

        match self.repository.fetch_wallet_data().await {
            Ok(data) => {
                self.state = WalletScreenState {
                    is_loading: false,
                    wallet_data: Some(data),
                    ..self.state.clone()
                };
            }
            Err(err) => {
                self.state = WalletScreenState {
                    is_loading: false,
                    error: Some(err.to_string()),
                    ..self.state.clone()
                };
            }
        }
    }

    /// A payment-method row was selected.
    ///
    /// Selecting the already-active cash row is an implicit request to
    /// switch to the first saved card; selecting the already-active card
    /// (or cash with no cards to toggle to) is a no-op, as is any
    /// selection while an update is in flight.
    pub async fn on_payment_method_selected(&mut self, method: PaymentMethod) {
        if self.state.is_updating_payment {
            return;
        }
        let Some(data) = self.state.wallet_data.clone() else {
            return;
        };

        let target = if method.same_method(&data.active_method) {
            match (&method, data.cards.first()) {
                (PaymentMethod::Cash, Some(card)) => PaymentMethod::Card(card.clone()),
                _ => return,
            }
        } else {
            method
        };

        self.state = WalletScreenState {
            is_updating_payment: true,
            error: None,
            ..self.state.clone()
        };

        match self.repository.update_payment_method(&target).await {
            Ok(()) => {
                // Server truth, not an optimistic patch
                self.load_wallet_data().await;
            }
            Err(err) => {
                let message = err.to_string();
                self.state = WalletScreenState {
                    is_updating_payment: false,
                    error: Some(message.clone()),
                    ..self.state.clone()
                };
                self.effects.push(WalletEffect::ShowToast(message));
            }
        }

        if self.state.is_updating_payment {
            self.state = WalletScreenState {
                is_updating_payment: false,
                ..self.state.clone()
            };
        }
    }

    /// Hand off to the add-card screen.
    pub fn on_add_card_clicked(&mut self) {
        self.effects.push(WalletEffect::NavigateToAddCard);
    }

    // ---- promo sheet ----

    pub fn show_promo_sheet(&mut self) {
        self.state = WalletScreenState {
            show_promo_sheet: true,
            promo_code_error: None,
            error: None,
            ..self.state.clone()
        };
    }

    pub fn dismiss_promo_sheet(&mut self) {
        self.state = WalletScreenState {
            show_promo_sheet: false,
            promo_code_input: String::new(),
            promo_code_error: None,
            ..self.state.clone()
        };
    }

    pub fn on_promo_code_changed(&mut self, code: &str) {
        self.state = WalletScreenState {
            promo_code_input: code.to_string(),
            promo_code_error: None,
            ..self.state.clone()
        };
    }

    /// Apply the entered promo code.
    ///
    /// Blank input is rejected locally. Success closes the sheet and
    /// reloads the wallet, since a promo may change the balance. Failure
    /// keeps the sheet open and touches only the promo-specific error.
    pub async fn apply_promo_code(&mut self) {
        let code = self.state.promo_code_input.clone();
        if code.trim().is_empty() {
            self.state = WalletScreenState {
                promo_code_error: Some("Enter a promo code first".to_string()),
                ..self.state.clone()
            };
            return;
        }

        self.state = WalletScreenState {
            is_applying_promo: true,
            promo_code_error: None,
            ..self.state.clone()
        };

        match self.repository.apply_promo_code(&code).await {
            Ok(()) => {
                self.state = WalletScreenState {
                    show_promo_sheet: false,
                    promo_code_input: String::new(),
                    promo_code_error: None,
                    ..self.state.clone()
                };
                self.effects
                    .push(WalletEffect::ShowToast("Promo code accepted!".to_string()));
                self.load_wallet_data().await;
            }
            Err(err) => {
                self.state = WalletScreenState {
                    promo_code_error: Some(err.to_string()),
                    ..self.state.clone()
                };
            }
        }

        self.state = WalletScreenState {
            is_applying_promo: false,
            ..self.state.clone()
        };
    }
}
