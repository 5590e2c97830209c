//! biconomy-monitor: terminal monitor for one Biconomy spot trading pair
//!
//! This library provides the core components for:
//! - Public market data readers (orderbook, ticker, trades, server time)
//! - Authenticated account readers (balances, open orders, order history)
//! - HMAC-SHA256 request signing for the private REST endpoints
//! - Plain-text report rendering for terminal output
//!
//! Each subcommand performs a single HTTP round trip against the exchange,
//! prints a report to stdout, and exits. There is no shared state between
//! invocations.

pub mod account;
pub mod cli;
pub mod config;
pub mod exchange;
pub mod market;
pub mod telemetry;
