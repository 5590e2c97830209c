//! Account state domain types
//!
//! Balances and order records fetched through the authenticated endpoints.
//! Like the market types, these are transient: built per invocation,
//! printed, dropped.

mod balance;
mod orders;

pub use balance::AssetBalance;
pub use orders::{OrderRecord, OrderStatus};
