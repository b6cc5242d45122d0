//! State for the trade screen.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ui::mvi::UiState;

/// Trade screen state. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TradeState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    Loading,
    /// Loading balances or price failed. Reopen the screen to retry.
    Error,
    Success(TradeSuccess),
}

/// Everything the loaded screen shows, plus the raw values that amount
/// changes are validated against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeSuccess {
    pub formatted_crypto_balance: String,
    pub formatted_fiat_balance: String,
    pub fiat_balance: Decimal,
    pub crypto_price: Decimal,
    pub formatted_exchange_rate: String,
    /// Fiat amount the user intends to spend. Never negative.
    pub amount: Decimal,
    /// Crypto received for `amount`, 8 fractional digits.
    pub formatted_result: String,
    pub is_buying_allowed: bool,
    /// Set iff buying is not allowed and `amount` is positive.
    pub no_balance_error: Option<TradeValidationError>,
}

/// Validation problems shown next to the amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeValidationError {
    InsufficientBalance,
}

impl fmt::Display for TradeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeValidationError::InsufficientBalance => write!(f, "Insufficient balance"),
        }
    }
}

impl UiState for TradeState {}

impl TradeState {
    /// The loaded payload, or `None` in any other state.
    pub fn success(&self) -> Option<&TradeSuccess> {
        match self {
            Self::Success(success) => Some(success),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
