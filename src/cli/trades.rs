//! `trades` subcommand: recent public executions

use chrono::{DateTime, Utc};

use crate::cli::format;
use crate::config;
use crate::exchange::BiconomyClient;
use crate::market::MarketTrade;

pub async fn execute() -> anyhow::Result<()> {
    println!("Fetching {} trades from Biconomy...", config::MARKET);
    let client = BiconomyClient::new();
    let trades = client.fetch_trades(config::MARKET).await?;
    print!("{}", render_trades(&trades, Utc::now()));
    Ok(())
}

/// Render the recent-trades table plus the most recent execution price
pub fn render_trades(trades: &[MarketTrade], at: DateTime<Utc>) -> String {
    let base = config::base_asset();
    let quote = config::quote_asset();

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(80));
    out.push('\n');
    out.push_str(&format!(
        "{}-{} Recent Trades at {}\n",
        base,
        quote,
        format::timestamp(at)
    ));
    out.push_str(&format::rule(80));
    out.push_str("\n\n");

    if trades.is_empty() {
        out.push_str("No recent trades\n");
        out.push('\n');
        out.push_str(&format::rule(80));
        out.push_str("\n\n");
        return out;
    }

    out.push_str(&format!(
        "{:<20} {:<6} {:<12} {:<14} {:<14}\n",
        "Time",
        "Side",
        "Price",
        format!("Amount ({})", base),
        format!("Total ({})", quote)
    ));
    out.push_str(&format::dash(80));
    out.push('\n');

    for trade in trades {
        out.push_str(&format!(
            "{:<20} {:<6} ${:<11} {:<14} ${:<13}\n",
            trade.executed_at.format("%Y-%m-%d %H:%M:%S"),
            trade.side.as_str(),
            format::dec(trade.price, 4),
            format::dec(trade.amount, 2),
            format::dec(trade.notional(), 2)
        ));
    }

    out.push('\n');
    out.push_str(&format::rule(80));
    out.push('\n');
    out.push_str(&format!(
        "Last Trade Price: ${}\n",
        format::dec(trades[0].price, 4)
    ));
    out.push_str(&format::rule(80));
    out.push_str("\n\n");
    out
}
