//! 24-hour ticker snapshot

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trailing 24h statistics for one market, exactly as reported by the
/// exchange. Fields the exchange omits default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerSnapshot {
    /// Exchange symbol (e.g. `MCM_USDT`)
    pub symbol: String,
    /// Last traded price
    pub last: Decimal,
    /// 24h high
    pub high: Decimal,
    /// 24h low
    pub low: Decimal,
    /// 24h traded volume in base units
    pub volume: Decimal,
    /// 24h change in percent
    pub change_pct: Decimal,
    /// Best bid price
    pub buy: Decimal,
    /// Best ask price
    pub sell: Decimal,
}
