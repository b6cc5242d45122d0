use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::error::RepositoryError;
use super::latency::simulate_network_latency;
use crate::config::{LatencyConfig, MarketConfig};

/// Source of the current crypto price (fiat per one crypto unit).
#[async_trait]
pub trait PriceRepository: Send + Sync {
    async fn get_crypto_price(&self) -> Result<Decimal, RepositoryError>;
}

/// Stand-in for a live price feed: always answers with the same price.
#[derive(Debug, Clone)]
pub struct FixedPriceRepository {
    price: Decimal,
    latency: Duration,
}

impl FixedPriceRepository {
    pub fn new(price: Decimal, latency: Duration) -> Self {
        Self { price, latency }
    }

    pub fn from_config(market: &MarketConfig, latency: &LatencyConfig) -> Self {
        Self::new(market.crypto_price, latency.price())
    }
}

impl Default for FixedPriceRepository {
    fn default() -> Self {
        Self::from_config(&MarketConfig::default(), &LatencyConfig::default())
    }
}

#[async_trait]
impl PriceRepository for FixedPriceRepository {
    async fn get_crypto_price(&self) -> Result<Decimal, RepositoryError> {
        simulate_network_latency(self.latency).await;
        tracing::trace!(price = %self.price, "Price served");
        Ok(self.price)
    }
}
