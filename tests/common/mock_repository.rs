//! Configurable repository doubles.
//!
//! Each double records its calls into a shared [`CallLog`] so tests can
//! assert on call order across repositories.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mvi_trade::repository::{Balances, BalancesRepository, PriceRepository, RepositoryError};
use parking_lot::Mutex;
use rust_decimal::Decimal;

pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable {
        reason: "mock failure".to_string(),
    }
}

/// Balances double.
///
/// With `count_reads`, every read reports the 1-based read number as the
/// crypto balance, so tests can tell which read a state came from.
pub struct MockBalances {
    balances: Mutex<Balances>,
    pub read_delay: Duration,
    pub count_reads: bool,
    pub fail_reads: AtomicBool,
    pub fail_buys: AtomicBool,
    pub reads: AtomicUsize,
    pub buys: Mutex<Vec<(Decimal, Decimal)>>,
    log: CallLog,
}

impl MockBalances {
    pub fn new(crypto_balance: Decimal, fiat_balance: Decimal, log: CallLog) -> Self {
        Self {
            balances: Mutex::new(Balances {
                crypto_balance,
                fiat_balance,
            }),
            read_delay: Duration::ZERO,
            count_reads: false,
            fail_reads: AtomicBool::new(false),
            fail_buys: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
            buys: Mutex::new(Vec::new()),
            log,
        }
    }

    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    pub fn counting_reads(mut self) -> Self {
        self.count_reads = true;
        self
    }

    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_buys(self) -> Self {
        self.fail_buys.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl BalancesRepository for MockBalances {
    async fn get_balances(&self) -> Result<Balances, RepositoryError> {
        self.log.lock().push("get_balances");
        let read = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.read_delay.is_zero() {
            tokio::time::sleep(self.read_delay).await;
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let mut balances = *self.balances.lock();
        if self.count_reads {
            balances.crypto_balance = Decimal::from(read as u64);
        }
        Ok(balances)
    }

    async fn buy_crypto(
        &self,
        fiat_amount: Decimal,
        price: Decimal,
    ) -> Result<(), RepositoryError> {
        self.log.lock().push("buy_crypto");
        self.buys.lock().push((fiat_amount, price));
        if self.fail_buys.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }
}

/// Price double.
pub struct MockPrice {
    price: Decimal,
    pub fail: AtomicBool,
    pub reads: AtomicUsize,
    log: CallLog,
}

impl MockPrice {
    pub fn new(price: Decimal, log: CallLog) -> Self {
        Self {
            price,
            fail: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
            log,
        }
    }

    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl PriceRepository for MockPrice {
    async fn get_crypto_price(&self) -> Result<Decimal, RepositoryError> {
        self.log.lock().push("get_crypto_price");
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.price)
    }
}
