//! # Wallet Domain Model
//!
//! Domain entities built from the wire DTOs by the repository. A
//! [`WalletData`] value is an immutable snapshot rebuilt on every
//! successful fetch; screens replace it wholesale, never patch it.

use crate::utils::format::format_balance;
use shared::CardItem;

/// One saved card, as reported by the server.
///
/// Cards are only ever constructed from the server's card list. The
/// add-card flow sends a request DTO and reloads; it never builds a
/// `Card` into local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    /// Last four digits, for row labels.
    pub last4: String,
    /// Full number as the server returned it, for the detail display.
    pub number: String,
    /// Expiry in `MM/YY` form.
    pub expires: String,
}

impl From<CardItem> for Card {
    fn from(item: CardItem) -> Self {
        let digit_count = item.number.chars().count();
        let last4 = item
            .number
            .chars()
            .skip(digit_count.saturating_sub(4))
            .collect();
        Self {
            id: item.id,
            last4,
            number: item.number,
            expires: item.expire_date,
        }
    }
}

/// A payment source the server can apply to new activity.
///
/// `Unknown` is the degraded form used when the server references a
/// card the client cannot resolve; it carries no payload and can never
/// be submitted back to the server.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    Cash,
    Card(Card),
    Unknown,
}

impl PaymentMethod {
    /// Method identity for switching decisions: variant plus card id.
    /// Card metadata (number, expiry) does not participate.
    pub fn same_method(&self, other: &PaymentMethod) -> bool {
        match (self, other) {
            (PaymentMethod::Cash, PaymentMethod::Cash) => true,
            (PaymentMethod::Card(a), PaymentMethod::Card(b)) => a.id == b.id,
            (PaymentMethod::Unknown, PaymentMethod::Unknown) => true,
            _ => false,
        }
    }

    pub fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }

    pub fn card_id(&self) -> Option<i64> {
        match self {
            PaymentMethod::Card(card) => Some(card.id),
            _ => None,
        }
    }
}

/// Immutable wallet snapshot: balance, saved cards (server order) and the
/// active payment method.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletData {
    pub balance: f64,
    pub cards: Vec<Card>,
    pub active_method: PaymentMethod,
}

impl WalletData {
    /// Build a snapshot, resolving the server's active-method tag against
    /// the fetched card list.
    ///
    /// A `"card"` tag whose id is absent from `cards` degrades to
    /// [`PaymentMethod::Unknown`] instead of failing the fetch, as does
    /// any tag the client does not recognize.
    pub fn resolve(
        balance: f64,
        cards: Vec<Card>,
        active_tag: &str,
        active_card_id: Option<i64>,
    ) -> Self {
        let active_method = match active_tag {
            "cash" => PaymentMethod::Cash,
            "card" => cards
                .iter()
                .find(|card| Some(card.id) == active_card_id)
                .cloned()
                .map(PaymentMethod::Card)
                .unwrap_or(PaymentMethod::Unknown),
            _ => PaymentMethod::Unknown,
        };
        Self {
            balance,
            cards,
            active_method,
        }
    }

    /// The selectable rows: cash first, then the cards in server order.
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        std::iter::once(PaymentMethod::Cash)
            .chain(self.cards.iter().cloned().map(PaymentMethod::Card))
            .collect()
    }

    /// Balance formatted for display, falling back to the raw numeric
    /// string when formatting is not possible.
    pub fn balance_formatted(&self) -> String {
        format_balance(self.balance)
    }
}
