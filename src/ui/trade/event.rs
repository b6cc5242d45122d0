//! Events sent by the trade screen.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeEvent {
    /// Screen became visible; (re)load balances and price.
    ScreenLoad,
    /// Settings button pressed.
    SettingsClick,
    /// Buy button pressed; spend the entered fiat amount.
    BuyCryptoClick,
    /// Amount field text changed.
    AmountChange(String),
}

impl Intent for TradeEvent {}
