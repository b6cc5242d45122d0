//! Reducer for the trade screen.

use rust_decimal::Decimal;

use crate::amount::{fiat_to_crypto, parse_amount};
use crate::format::AmountFormatter;
use crate::repository::Balances;
use crate::ui::mvi::Reducer;

use super::action::TradeAction;
use super::state::{TradeState, TradeSuccess, TradeValidationError};

/// Reducer for trade state transitions.
///
/// Pure function: repository calls and effects are handled by the view
/// model around the dispatch call.
#[derive(Debug, Clone, Default)]
pub struct TradeReducer {
    formatter: AmountFormatter,
}

impl TradeReducer {
    pub fn new(formatter: AmountFormatter) -> Self {
        Self { formatter }
    }

    fn loaded(&self, balances: Balances, crypto_price: Decimal) -> TradeSuccess {
        TradeSuccess {
            formatted_crypto_balance: self
                .formatter
                .format_crypto_with_symbol(balances.crypto_balance),
            formatted_fiat_balance: self
                .formatter
                .format_fiat_with_symbol(balances.fiat_balance),
            fiat_balance: balances.fiat_balance,
            crypto_price,
            formatted_exchange_rate: self.formatter.format_exchange_rate(crypto_price),
            amount: Decimal::ZERO,
            formatted_result: self.default_result(),
            is_buying_allowed: false,
            no_balance_error: None,
        }
    }

    fn amount_changed(&self, success: TradeSuccess, value: &str) -> TradeSuccess {
        let Ok(amount) = parse_amount(value) else {
            return self.reset_amount(success);
        };
        let Ok(result) = fiat_to_crypto(amount, success.crypto_price) else {
            return self.reset_amount(success);
        };

        let is_buying_allowed = amount <= success.fiat_balance;
        let no_balance_error = (!is_buying_allowed && amount > Decimal::ZERO)
            .then_some(TradeValidationError::InsufficientBalance);

        TradeSuccess {
            amount,
            formatted_result: self.formatter.format_crypto(result),
            is_buying_allowed,
            no_balance_error,
            ..success
        }
    }

    /// Unparseable input behaves like an empty field. The amount itself is
    /// reset as well, not only the result and the buy flags.
    fn reset_amount(&self, success: TradeSuccess) -> TradeSuccess {
        TradeSuccess {
            amount: Decimal::ZERO,
            formatted_result: self.default_result(),
            is_buying_allowed: false,
            no_balance_error: None,
            ..success
        }
    }

    fn default_result(&self) -> String {
        self.formatter.format_crypto(Decimal::ZERO)
    }
}

impl Reducer for TradeReducer {
    type State = TradeState;
    type Intent = TradeAction;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TradeAction::LoadStarted => TradeState::Loading,

            TradeAction::Loaded {
                balances,
                crypto_price,
            } => TradeState::Success(self.loaded(balances, crypto_price)),

            TradeAction::LoadFailed => TradeState::Error,

            TradeAction::AmountChanged(value) => match state {
                TradeState::Success(success) => {
                    TradeState::Success(self.amount_changed(success, &value))
                }
                other => other,
            },

            TradeAction::PurchaseStarted => match state {
                TradeState::Success(_) => TradeState::Loading,
                other => other,
            },
        }
    }
}
