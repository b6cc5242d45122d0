use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every section is optional; an empty file yields the built-in demo values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

/// Seed balances and the fixed exchange rate.
///
/// Amounts are written as strings (`"36456.00"`) so no precision is lost
/// through floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Initial crypto balance.
    #[serde(default = "default_crypto_balance")]
    pub crypto_balance: Decimal,
    /// Initial fiat balance.
    #[serde(default = "default_fiat_balance")]
    pub fiat_balance: Decimal,
    /// Fiat price of one crypto unit.
    #[serde(default = "default_crypto_price")]
    pub crypto_price: Decimal,
}

/// Simulated network latency of the in-memory repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay of a balances read in milliseconds (default: 1500).
    #[serde(default = "default_balances_ms")]
    pub balances_ms: u64,
    /// Delay of a price read in milliseconds (default: 500).
    #[serde(default = "default_price_ms")]
    pub price_ms: u64,
    /// Delay of a purchase in milliseconds (default: 100).
    #[serde(default = "default_buy_ms")]
    pub buy_ms: u64,
}

/// Display settings for amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Currency code shown before crypto amounts (e.g., "BTC").
    #[serde(default = "default_crypto_symbol")]
    pub crypto_symbol: String,
    /// Currency code shown before fiat amounts (e.g., "EUR").
    #[serde(default = "default_fiat_symbol")]
    pub fiat_symbol: String,
    /// Thousands separator; unset disables grouping.
    #[serde(default)]
    pub group_separator: Option<char>,
}

fn default_crypto_balance() -> Decimal {
    Decimal::new(123_450_000, 8)
}

fn default_fiat_balance() -> Decimal {
    Decimal::new(3_645_600, 2)
}

fn default_crypto_price() -> Decimal {
    Decimal::new(5_026_847, 2)
}

fn default_balances_ms() -> u64 {
    1500
}

fn default_price_ms() -> u64 {
    500
}

fn default_buy_ms() -> u64 {
    100
}

fn default_crypto_symbol() -> String {
    "BTC".to_string()
}

fn default_fiat_symbol() -> String {
    "EUR".to_string()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            crypto_balance: default_crypto_balance(),
            fiat_balance: default_fiat_balance(),
            crypto_price: default_crypto_price(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            balances_ms: default_balances_ms(),
            price_ms: default_price_ms(),
            buy_ms: default_buy_ms(),
        }
    }
}

impl LatencyConfig {
    /// No simulated delay anywhere.
    pub fn none() -> Self {
        Self {
            balances_ms: 0,
            price_ms: 0,
            buy_ms: 0,
        }
    }

    pub fn balances(&self) -> Duration {
        Duration::from_millis(self.balances_ms)
    }

    pub fn price(&self) -> Duration {
        Duration::from_millis(self.price_ms)
    }

    pub fn buy(&self) -> Duration {
        Duration::from_millis(self.buy_ms)
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            crypto_symbol: default_crypto_symbol(),
            fiat_symbol: default_fiat_symbol(),
            group_separator: None,
        }
    }
}
