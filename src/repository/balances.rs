use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::RepositoryError;
use super::latency::simulate_network_latency;
use crate::amount::fiat_to_crypto;
use crate::config::{LatencyConfig, MarketConfig};

/// Snapshot of the user's holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Balances {
    pub crypto_balance: Decimal,
    pub fiat_balance: Decimal,
}

/// Read and mutate the user's balances.
#[async_trait]
pub trait BalancesRepository: Send + Sync {
    /// Current balances as a copy.
    async fn get_balances(&self) -> Result<Balances, RepositoryError>;

    /// Spend `fiat_amount` on crypto at `price`.
    ///
    /// Affordability is the caller's responsibility: the fiat balance is
    /// not checked and may go negative.
    async fn buy_crypto(&self, fiat_amount: Decimal, price: Decimal)
        -> Result<(), RepositoryError>;
}

/// Balances held in memory, seeded from config.
///
/// A purchase is applied as one read-modify-write under the lock, so
/// concurrent buyers sharing one repository never lose updates.
#[derive(Debug)]
pub struct InMemoryBalancesRepository {
    balances: Mutex<Balances>,
    read_latency: Duration,
    buy_latency: Duration,
}

impl InMemoryBalancesRepository {
    pub fn new(seed: Balances, read_latency: Duration, buy_latency: Duration) -> Self {
        Self {
            balances: Mutex::new(seed),
            read_latency,
            buy_latency,
        }
    }

    pub fn from_config(market: &MarketConfig, latency: &LatencyConfig) -> Self {
        let seed = Balances {
            crypto_balance: market.crypto_balance,
            fiat_balance: market.fiat_balance,
        };
        Self::new(seed, latency.balances(), latency.buy())
    }

    /// Current balances without the simulated delay.
    pub fn snapshot(&self) -> Balances {
        *self.balances.lock()
    }
}

impl Default for InMemoryBalancesRepository {
    fn default() -> Self {
        Self::from_config(&MarketConfig::default(), &LatencyConfig::default())
    }
}

#[async_trait]
impl BalancesRepository for InMemoryBalancesRepository {
    async fn get_balances(&self) -> Result<Balances, RepositoryError> {
        simulate_network_latency(self.read_latency).await;
        Ok(self.snapshot())
    }

    async fn buy_crypto(
        &self,
        fiat_amount: Decimal,
        price: Decimal,
    ) -> Result<(), RepositoryError> {
        simulate_network_latency(self.buy_latency).await;

        let crypto_amount = fiat_to_crypto(fiat_amount, price)?;

        let updated = {
            let mut balances = self.balances.lock();
            balances.fiat_balance -= fiat_amount;
            balances.crypto_balance += crypto_amount;
            *balances
        };

        tracing::info!(
            fiat_spent = %fiat_amount,
            crypto_bought = %crypto_amount,
            fiat_balance = %updated.fiat_balance,
            crypto_balance = %updated.crypto_balance,
            "Crypto purchased"
        );
        Ok(())
    }
}
