//! Order records from the private order endpoints

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market::Side;

/// Lifecycle state of an order
///
/// The exchange reports status inconsistently: numeric event codes on some
/// payloads (1 = put, 2 = update, 3 = finish), lowercase labels on others.
/// [`OrderStatus::decode`] folds both plus the remaining-amount hint into
/// one of three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Resting on the book (possibly partially filled)
    Open,
    /// Fully executed
    Filled,
    /// Cancelled before completion
    Cancelled,
}

impl OrderStatus {
    /// Decode from the numeric event code, a string label, and the unfilled
    /// remainder, in that order of precedence. Unknown inputs mean the
    /// order is still open.
    pub fn decode(code: Option<i64>, label: Option<&str>, left: Option<Decimal>) -> Self {
        match code {
            Some(1) | Some(2) => return OrderStatus::Open,
            Some(3) => return OrderStatus::Filled,
            _ => {}
        }
        if let Some(label) = label {
            match label.to_ascii_lowercase().as_str() {
                "filled" | "finished" | "done" | "success" => return OrderStatus::Filled,
                "cancelled" | "canceled" | "cancel" => return OrderStatus::Cancelled,
                _ => {}
            }
        }
        if left == Some(Decimal::ZERO) {
            return OrderStatus::Filled;
        }
        OrderStatus::Open
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// One order on the account, open or finished
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Exchange order id
    pub id: u64,
    /// Order side
    pub side: Side,
    /// Limit price
    pub price: Decimal,
    /// Ordered amount in base units
    pub amount: Decimal,
    /// Filled amount in base units
    pub filled: Decimal,
    /// Lifecycle state
    pub status: OrderStatus,
    /// Creation time, when the exchange reports one
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderRecord {
    /// Quote-unit value of the full order
    pub fn notional(&self) -> Decimal {
        self.price * self.amount
    }
}
