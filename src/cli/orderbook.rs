//! `orderbook` subcommand: current depth, mid price, and spread

use crate::cli::format;
use crate::config;
use crate::exchange::BiconomyClient;
use crate::market::{Orderbook, PriceLevel};

pub async fn execute() -> anyhow::Result<()> {
    println!("Fetching {} orderbook from Biconomy...", config::MARKET);
    let client = BiconomyClient::new();
    let book = client.fetch_orderbook(config::MARKET).await?;
    print!("{}", render_orderbook(&book));
    Ok(())
}

/// Render the depth report: ten best asks (best ask last, adjacent to the
/// summary block), mid/spread summary, ten best bids.
pub fn render_orderbook(book: &Orderbook) -> String {
    let base = config::base_asset();
    let quote = config::quote_asset();

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(60));
    out.push('\n');
    out.push_str(&format!(
        "{}-{} Orderbook at {}\n",
        base,
        quote,
        format::timestamp(book.fetched_at)
    ));
    out.push_str(&format::rule(60));
    out.push_str("\n\n");

    out.push_str("ASKS (Sell Orders):\n");
    push_level_header(&mut out, base, quote);
    for level in book.asks.iter().take(10).rev() {
        push_level_row(&mut out, level);
    }

    if let (Some(mid), Some(spread)) = (book.mid_price(), book.spread()) {
        let spread_pct = book.spread_pct().unwrap_or_default();
        out.push('\n');
        out.push_str(&format::rule(50));
        out.push('\n');
        out.push_str(&format!("Mid Price: ${}\n", format::dec(mid, 4)));
        out.push_str(&format!(
            "Spread: ${} ({}%)\n",
            format::dec(spread, 4),
            format::dec(spread_pct, 2)
        ));
        out.push_str(&format::rule(50));
        out.push_str("\n\n");
    }

    out.push_str("BIDS (Buy Orders):\n");
    push_level_header(&mut out, base, quote);
    for level in book.bids.iter().take(10) {
        push_level_row(&mut out, level);
    }

    out.push('\n');
    out
}

fn push_level_header(out: &mut String, base: &str, quote: &str) {
    out.push_str(&format!(
        "{:<15} {:<15} {:<15}\n",
        "Price",
        format!("Amount ({})", base),
        format!("Total ({})", quote)
    ));
    out.push_str(&format::dash(50));
    out.push('\n');
}

fn push_level_row(out: &mut String, level: &PriceLevel) {
    out.push_str(&format!(
        "${:<14} {:<14} ${:<14}\n",
        format::dec(level.price, 4),
        format::dec(level.amount, 2),
        format::dec(level.notional(), 2)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_book() -> Orderbook {
        let mut book = Orderbook::new(config::MARKET);
        book.bids = vec![
            PriceLevel {
                price: dec!(0.0500),
                amount: dec!(1500),
            },
            PriceLevel {
                price: dec!(0.0490),
                amount: dec!(2000),
            },
        ];
        book.asks = vec![
            PriceLevel {
                price: dec!(0.0520),
                amount: dec!(1200),
            },
            PriceLevel {
                price: dec!(0.0530),
                amount: dec!(800),
            },
        ];
        book
    }

    #[test]
    fn test_render_contains_mid_and_spread() {
        let report = render_orderbook(&sample_book());
        assert!(report.contains("Mid Price: $0.0510"));
        assert!(report.contains("Spread: $0.0020"));
    }

    #[test]
    fn test_render_best_ask_adjacent_to_summary() {
        let report = render_orderbook(&sample_book());
        // Asks are printed descending: worst first, best directly above
        // the mid/spread block.
        let best_ask = report.find("$0.0520").unwrap();
        let worst_ask = report.find("$0.0530").unwrap();
        let summary = report.find("Mid Price").unwrap();
        assert!(worst_ask < best_ask);
        assert!(best_ask < summary);
    }

    #[test]
    fn test_render_one_sided_book_omits_summary() {
        let mut book = sample_book();
        book.bids.clear();
        let report = render_orderbook(&book);
        assert!(!report.contains("Mid Price"));
        assert!(!report.contains("Spread"));
        assert!(report.contains("BIDS (Buy Orders):"));
    }

    #[test]
    fn test_render_level_notional() {
        let report = render_orderbook(&sample_book());
        // 0.0500 * 1500 = 75.00
        assert!(report.contains("$75.00"));
    }
}
