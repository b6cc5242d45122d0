use std::path::PathBuf;

use clap::Parser;

/// Buy crypto with fiat through an MVI view model.
#[derive(Debug, Parser)]
#[command(name = "mvi-trade", version, about)]
pub struct Args {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable simulated network latency.
    #[arg(long)]
    pub no_latency: bool,

    /// Print states and effects as JSON lines.
    #[arg(long)]
    pub json: bool,
}
