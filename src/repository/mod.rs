//! Data sources consumed by the view models.
//!
//! Both repositories are async traits so view models can be driven by the
//! in-memory demo sources, or by mocks in tests, through the same seam.

mod balances;
mod error;
mod latency;
mod price;

pub use balances::{Balances, BalancesRepository, InMemoryBalancesRepository};
pub use error::RepositoryError;
pub use latency::simulate_network_latency;
pub use price::{FixedPriceRepository, PriceRepository};
