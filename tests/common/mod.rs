//! Shared test utilities and mock repositories.

#![allow(dead_code, unused_imports)]

pub mod mock_repository;

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use mvi_trade::ui::trade::{TradeState, TradeSuccess};
use rust_decimal::Decimal;
use tokio::sync::watch;

pub use mock_repository::{CallLog, MockBalances, MockPrice};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

/// Fail the test instead of hanging when a future never completes.
pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(10), future)
        .await
        .expect("timed out")
}

/// Wait until the published state satisfies `predicate`.
pub async fn wait_for_state(
    states: &mut watch::Receiver<TradeState>,
    predicate: impl FnMut(&TradeState) -> bool,
) -> TradeState {
    within(states.wait_for(predicate))
        .await
        .expect("view model stopped")
        .clone()
}

/// Wait for the next Success state.
pub async fn wait_for_success(states: &mut watch::Receiver<TradeState>) -> TradeSuccess {
    match wait_for_state(states, |state| state.success().is_some()).await {
        TradeState::Success(success) => success,
        other => panic!("expected Success, got {other:?}"),
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
