//! Configuration for seed balances, price, simulated latency and display.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FormatConfig, LatencyConfig, MarketConfig};
