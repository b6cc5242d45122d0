//! Model-View-Intent trade screen.
//!
//! A view model owns one observable state, consumes events and emits
//! one-shot effects. The trade screen buys crypto with fiat at a fixed
//! price against in-memory balances.

pub mod amount;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod repository;
pub mod ui;

pub use config::Config;
pub use format::AmountFormatter;
pub use ui::trade::{TradeEffect, TradeEvent, TradeState, TradeViewModel};
