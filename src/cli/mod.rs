//! CLI interface for biconomy-monitor
//!
//! One subcommand per reader:
//! - `orderbook`, `ticker`, `trades`, `time`: public market data
//! - `balance`, `orders`, `history`: account state (signed requests)
//!
//! Each subcommand performs a single request, prints its report to stdout,
//! and exits; errors terminate the process with a non-zero status.

pub mod balance;
pub mod format;
pub mod history;
pub mod orderbook;
pub mod orders;
pub mod ticker;
pub mod time;
pub mod trades;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "biconomy-monitor")]
#[command(about = "Terminal monitor for one Biconomy spot trading pair")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current orderbook
    Orderbook,
    /// Show 24h ticker statistics
    Ticker,
    /// Show recent public trades
    Trades,
    /// Show exchange server time and local clock drift
    Time,
    /// Show account balances (requires API credentials)
    Balance,
    /// Show open orders (requires API credentials)
    Orders,
    /// Show recently finished orders (requires API credentials)
    History,
}
