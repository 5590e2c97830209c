//! Market data domain types
//!
//! Snapshots of public exchange state: orderbook, 24h ticker, recent trades.
//! Everything is built fresh per invocation and discarded on exit.

mod book;
mod ticker;
mod trades;

pub use book::{Orderbook, PriceLevel};
pub use ticker::TickerSnapshot;
pub use trades::MarketTrade;

use serde::{Deserialize, Serialize};

/// Trade side
///
/// The exchange encodes sides numerically on order records (2 = buy,
/// 1 = sell) and as lowercase labels on the public trades feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Decode the exchange's numeric side code. Anything other than the
    /// documented sell code (1) is treated as a buy, matching how the
    /// exchange defaults the field.
    pub fn from_code(code: i64) -> Self {
        if code == 1 {
            Side::Sell
        } else {
            Side::Buy
        }
    }

    /// Decode the `"buy"`/`"sell"` labels used by the trades feed
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("sell") {
            Side::Sell
        } else {
            Side::Buy
        }
    }

    /// Upper-case label for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}
