//! Orderbook snapshot

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price level of the book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Level price in quote units
    pub price: Decimal,
    /// Resting amount in base units
    pub amount: Decimal,
}

impl PriceLevel {
    /// Quote-unit value of the level
    pub fn notional(&self) -> Decimal {
        self.price * self.amount
    }
}

/// L2 orderbook snapshot for one market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orderbook {
    /// Exchange symbol (e.g. `MCM_USDT`)
    pub symbol: String,
    /// Bid levels, sorted best (highest) to worst
    pub bids: Vec<PriceLevel>,
    /// Ask levels, sorted best (lowest) to worst
    pub asks: Vec<PriceLevel>,
    /// When the snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl Orderbook {
    /// Create a new empty orderbook
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bids: vec![],
            asks: vec![],
            fetched_at: Utc::now(),
        }
    }

    /// Get best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l.price)
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l.price)
    }

    /// Get mid price
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }

    /// Get spread
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Get spread as a percentage of the mid price
    pub fn spread_pct(&self) -> Option<Decimal> {
        match (self.spread(), self.mid_price()) {
            (Some(spread), Some(mid)) if !mid.is_zero() => {
                Some(spread / mid * Decimal::ONE_HUNDRED)
            }
            _ => None,
        }
    }
}
