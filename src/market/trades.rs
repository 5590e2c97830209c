//! Public trade history entries

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;

/// One executed trade from the public trades feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrade {
    /// Exchange trade id
    pub id: u64,
    /// Taker side
    pub side: Side,
    /// Execution price
    pub price: Decimal,
    /// Executed amount in base units
    pub amount: Decimal,
    /// Execution time
    pub executed_at: DateTime<Utc>,
}

impl MarketTrade {
    /// Quote-unit value of the trade
    pub fn notional(&self) -> Decimal {
        self.price * self.amount
    }
}
