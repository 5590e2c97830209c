//! `orders` subcommand: open orders for the monitored market (signed request)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::account::OrderRecord;
use crate::cli::format;
use crate::config::{self, Credentials};
use crate::exchange::{BiconomyAuth, BiconomyClient};
use crate::market::Side;

pub async fn execute() -> anyhow::Result<()> {
    let credentials = Credentials::from_env()?;

    println!("Fetching open orders from Biconomy...");
    let client = BiconomyClient::with_auth(BiconomyAuth::new(credentials));
    let orders = client.fetch_open_orders(config::MARKET).await?;
    print!("{}", render_orders(&orders, Utc::now()));
    Ok(())
}

/// Render the open-orders table and summary. An empty book prints
/// "No open orders" and is not an error.
pub fn render_orders(orders: &[OrderRecord], at: DateTime<Utc>) -> String {
    let base = config::base_asset();
    let quote = config::quote_asset();

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(100));
    out.push('\n');
    out.push_str(&format!(
        "Open Orders for {}-{} at {}\n",
        base,
        quote,
        format::timestamp(at)
    ));
    out.push_str(&format::rule(100));
    out.push_str("\n\n");

    if orders.is_empty() {
        out.push_str("No open orders\n");
        out.push('\n');
        out.push_str(&format::rule(100));
        out.push_str("\n\n");
        return out;
    }

    out.push_str(&format!(
        "{:<15} {:<6} {:<12} {:<12} {:<12} {:<12}\n",
        "Order ID", "Side", "Price", "Amount", "Filled", "Total"
    ));
    out.push_str(&format::dash(100));
    out.push('\n');

    let mut total_buy_notional = Decimal::ZERO;
    let mut total_sell_amount = Decimal::ZERO;

    for order in orders {
        out.push_str(&order_row(order));
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

/// One table row. Order ids are shown truncated to their last 12 digits.
pub(crate) fn order_row(order: &OrderRecord) -> String {
    format!(
        "{:<15} {:<6} ${:<11} {:<12} {:<12} ${:<11}\n",
        short_id(order.id),
        order.side.as_str(),
        format::dec(order.price, 4),
        format::dec(order.amount, 2),
        format::dec(order.filled, 2),
        format::dec(order.notional(), 2)
    )
}

pub(crate) fn short_id(id: u64) -> String {
    let text = id.to_string();
    if text.len() > 12 {
        text[text.len() - 12..].to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::OrderStatus;
    use rust_decimal_macros::dec;

    fn order(id: u64, side: Side, price: Decimal, amount: Decimal) -> OrderRecord {
        OrderRecord {
            id,
            side,
            price,
            amount,
            filled: dec!(0),
            status: OrderStatus::Open,
            created_at: None,
        }
    }

    #[test]
    fn test_render_summary_totals() {
        let orders = vec![
            order(1, Side::Buy, dec!(0.0500), dec!(1000)),
            order(2, Side::Buy, dec!(0.0490), dec!(2000)),
            order(3, Side::Sell, dec!(0.0530), dec!(500)),
        ];
        let report = render_orders(&orders, Utc::now());
        // 0.05*1000 + 0.049*2000 = 148.00 quote; 500 base on the sell side
        assert!(report.contains("Total Buy Orders:  $148.00 USDT"));
        assert!(report.contains("Total Sell Orders: 500.00 MCM"));
        assert!(report.contains("Number of Orders:  3"));
    }

    #[test]
    fn test_render_empty_book() {
        let report = render_orders(&[], Utc::now());
        assert!(report.contains("No open orders"));
        assert!(!report.contains("Summary:"));
    }

    #[test]
    fn test_short_id_truncates_to_last_12() {
        assert_eq!(short_id(123), "123");
        assert_eq!(short_id(9_876_543_210_123_456), "543210123456");
    }
}
