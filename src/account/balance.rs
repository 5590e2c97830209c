//! Per-asset account balances

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Available and frozen amounts for one asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBalance {
    /// Asset name (e.g. `MCM`, `USDT`)
    pub asset: String,
    /// Amount free to trade
    pub available: Decimal,
    /// Amount locked in open orders
    pub frozen: Decimal,
}

impl AssetBalance {
    /// Total holdings: available plus frozen
    pub fn total(&self) -> Decimal {
        self.available + self.frozen
    }

    /// True when the asset holds nothing at all
    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }
}
