//! Transitions applied by the trade reducer.

use rust_decimal::Decimal;

use crate::repository::Balances;
use crate::ui::mvi::Intent;

/// Results of the view model's work, expressed as reducer input.
///
/// The view model turns each [`TradeEvent`](super::TradeEvent) into zero
/// or more actions around its repository calls.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeAction {
    LoadStarted,
    Loaded {
        balances: Balances,
        crypto_price: Decimal,
    },
    LoadFailed,
    AmountChanged(String),
    PurchaseStarted,
}

impl Intent for TradeAction {}
