//! Scripted backend for tests.
//!
//! `MockWalletApi` implements [`WalletApi`] over per-operation response
//! queues: each call pops the next scripted response, and the last one
//! stays sticky so repeated reloads keep answering. Call logs allow
//! asserting that an operation did (or did not) reach the backend.

use crate::core::service::WalletApi;
use crate::services::api::ApiError;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{CardItem, WalletResponse};
use std::collections::VecDeque;

pub(crate) fn wallet_response(
    balance: f64,
    active_method: &str,
    active_card_id: Option<i64>,
) -> WalletResponse {
    WalletResponse {
        balance,
        active_method: active_method.to_string(),
        active_card_id,
    }
}

pub(crate) fn card_item(id: i64, number: &str) -> CardItem {
    CardItem {
        id,
        number: number.to_string(),
        expire_date: "12/26".to_string(),
    }
}

#[derive(Default)]
pub(crate) struct MockWalletApi {
    register: Mutex<VecDeque<Result<(), ApiError>>>,
    wallet: Mutex<VecDeque<Result<WalletResponse, ApiError>>>,
    cards: Mutex<VecDeque<Result<Vec<CardItem>, ApiError>>>,
    add_card: Mutex<VecDeque<Result<(), ApiError>>>,
    promo: Mutex<VecDeque<Result<(), ApiError>>>,
    set_method: Mutex<VecDeque<Result<(), ApiError>>>,

    register_log: Mutex<Vec<String>>,
    wallet_fetch_count: Mutex<usize>,
    add_card_log: Mutex<Vec<(String, String)>>,
    promo_log: Mutex<Vec<String>>,
    set_method_log: Mutex<Vec<(String, Option<i64>)>>,
}

impl MockWalletApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ---- scripting ----

    pub(crate) fn script_register(&self, response: Result<(), ApiError>) {
        self.register.lock().push_back(response);
    }

    pub(crate) fn script_wallet(&self, response: Result<WalletResponse, ApiError>) {
        self.wallet.lock().push_back(response);
    }

    pub(crate) fn script_cards(&self, response: Result<Vec<CardItem>, ApiError>) {
        self.cards.lock().push_back(response);
    }

    pub(crate) fn script_add_card(&self, response: Result<(), ApiError>) {
        self.add_card.lock().push_back(response);
    }

    pub(crate) fn script_promo(&self, response: Result<(), ApiError>) {
        self.promo.lock().push_back(response);
    }

    pub(crate) fn script_set_method(&self, response: Result<(), ApiError>) {
        self.set_method.lock().push_back(response);
    }

    // ---- call logs ----

    pub(crate) fn register_calls(&self) -> Vec<String> {
        self.register_log.lock().clone()
    }

    pub(crate) fn wallet_fetches(&self) -> usize {
        *self.wallet_fetch_count.lock()
    }

    pub(crate) fn add_card_calls(&self) -> Vec<(String, String)> {
        self.add_card_log.lock().clone()
    }

    pub(crate) fn promo_calls(&self) -> Vec<String> {
        self.promo_log.lock().clone()
    }

    pub(crate) fn set_method_calls(&self) -> Vec<(String, Option<i64>)> {
        self.set_method_log.lock().clone()
    }

    fn next<T: Clone>(queue: &Mutex<VecDeque<Result<T, ApiError>>>, op: &str) -> Result<T, ApiError> {
        let mut queue = queue.lock();
        if queue.len() > 1 {
            queue.pop_front().unwrap_or_else(|| unreachable!())
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| panic!("no scripted response for {op}"))
        }
    }
}

#[async_trait]
impl WalletApi for MockWalletApi {
    async fn register_user(&self, phone: &str) -> Result<(), ApiError> {
        self.register_log.lock().push(phone.to_string());
        Self::next(&self.register, "register_user")
    }

    async fn fetch_wallet(&self) -> Result<WalletResponse, ApiError> {
        *self.wallet_fetch_count.lock() += 1;
        Self::next(&self.wallet, "fetch_wallet")
    }

    async fn fetch_cards(&self) -> Result<Vec<CardItem>, ApiError> {
        Self::next(&self.cards, "fetch_cards")
    }

    async fn add_card(&self, number: &str, expire_date: &str) -> Result<(), ApiError> {
        self.add_card_log
            .lock()
            .push((number.to_string(), expire_date.to_string()));
        Self::next(&self.add_card, "add_card")
    }

    async fn apply_promo_code(&self, code: &str) -> Result<(), ApiError> {
        self.promo_log.lock().push(code.to_string());
        Self::next(&self.promo, "apply_promo_code")
    }

    async fn set_active_payment_method(
        &self,
        active_method: &str,
        active_card_id: Option<i64>,
    ) -> Result<(), ApiError> {
        self.set_method_log
            .lock()
            .push((active_method.to_string(), active_card_id));
        Self::next(&self.set_method, "set_active_payment_method")
    }
}
