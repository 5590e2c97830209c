//! `history` subcommand: recently finished orders (signed request)
//!
//! One page only; the exchange paginates this endpoint but a monitor view
//! of the most recent page is all this reader shows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::account::OrderRecord;
use crate::cli::format;
use crate::cli::orders::short_id;
use crate::config::{self, Credentials};
use crate::exchange::{BiconomyAuth, BiconomyClient};
use crate::market::Side;

pub async fn execute() -> anyhow::Result<()> {
    let credentials = Credentials::from_env()?;

    println!("Fetching order history from Biconomy...");
    let client = BiconomyClient::with_auth(BiconomyAuth::new(credentials));
    let orders = client.fetch_order_history(config::MARKET).await?;
    print!("{}", render_history(&orders, Utc::now()));
    Ok(())
}

/// Render the finished-orders table: the open-orders layout plus a status
/// column.
pub fn render_history(orders: &[OrderRecord], at: DateTime<Utc>) -> String {
    let base = config::base_asset();
    let quote = config::quote_asset();

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(100));
    out.push('\n');
    out.push_str(&format!(
        "Order History for {}-{} at {}\n",
        base,
        quote,
        format::timestamp(at)
    ));
    out.push_str(&format::rule(100));
    out.push_str("\n\n");

    if orders.is_empty() {
        out.push_str("No finished orders\n");
        out.push('\n');
        out.push_str(&format::rule(100));
        out.push_str("\n\n");
        return out;
    }

    out.push_str(&format!(
        "{:<15} {:<6} {:<12} {:<12} {:<12} {:<12} {:<10}\n",
        "Order ID", "Side", "Price", "Amount", "Filled", "Total", "Status"
    ));
    out.push_str(&format::dash(100));
    out.push('\n');

    let mut total_buy_notional = Decimal::ZERO;
    let mut total_sell_amount = Decimal::ZERO;

    for order in orders {
        out.push_str(&format!(
            "{:<15} {:<6} ${:<11} {:<12} {:<12} ${:<11} {:<10}\n",
            short_id(order.id),
            order.side.as_str(),
            format::dec(order.price, 4),
            format::dec(order.amount, 2),
            format::dec(order.filled, 2),
            format::dec(order.notional(), 2),
            order.status.as_str()
        ));
        match order.side {
            Side::Buy => total_buy_notional += order.notional(),
            Side::Sell => total_sell_amount += order.amount,
        }
    }

    out.push('\n');
    out.push_str(&format::rule(100));
    out.push('\n');
    out.push_str("Summary:\n");
    out.push_str(&format!(
        "Total Buy Orders:  ${} {}\n",
        format::grouped(total_buy_notional, 2),
        quote
    ));
    out.push_str(&format!(
        "Total Sell Orders: {} {}\n",
        format::grouped(total_sell_amount, 2),
        base
    ));
    out.push_str(&format!("Number of Orders:  {}\n", orders.len()));
    out.push_str(&format::rule(100));
    out.push_str("\n\n");
    out
}
