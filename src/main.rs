use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use mvi_trade::cli::{run_session, Args, OutputFormat};
use mvi_trade::config::{Config, LatencyConfig};
use mvi_trade::format::AmountFormatter;
use mvi_trade::logging::init_tracing;
use mvi_trade::repository::{FixedPriceRepository, InMemoryBalancesRepository};
use mvi_trade::ui::home::HomeViewModel;
use mvi_trade::ui::trade::TradeViewModel;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if args.no_latency {
        config.latency = LatencyConfig::none();
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let result = runtime.block_on(run(config, &args));
    // Stdin is read on a blocking thread that cannot be cancelled.
    runtime.shutdown_background();
    result
}

async fn run(config: Config, args: &Args) -> anyhow::Result<()> {
    let balances = Arc::new(InMemoryBalancesRepository::from_config(
        &config.market,
        &config.latency,
    ));
    let prices = Arc::new(FixedPriceRepository::from_config(
        &config.market,
        &config.latency,
    ));
    let trade = TradeViewModel::spawn(balances, prices, AmountFormatter::from(&config.format));
    let home = HomeViewModel::new();

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    tracing::info!(
        crypto_price = %config.market.crypto_price,
        latency_ms = config.latency.balances_ms,
        "Trade session started"
    );

    let input = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = run_session(input, std::io::stdout(), trade, home, format) => {
            result.context("Session I/O failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
        }
    }

    Ok(())
}
