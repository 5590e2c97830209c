//! `ticker` subcommand: 24h market statistics

use chrono::{DateTime, Utc};

use crate::cli::format;
use crate::config;
use crate::exchange::BiconomyClient;
use crate::market::TickerSnapshot;

pub async fn execute() -> anyhow::Result<()> {
    println!("Fetching {} ticker from Biconomy...", config::MARKET);
    let client = BiconomyClient::new();
    let ticker = client.fetch_ticker(config::MARKET).await?;
    print!("{}", render_ticker(&ticker, Utc::now()));
    Ok(())
}

/// Render the 24h statistics report. Every value is the payload field
/// unmodified apart from fixed-point formatting.
pub fn render_ticker(ticker: &TickerSnapshot, at: DateTime<Utc>) -> String {
    let base = config::base_asset();
    let quote = config::quote_asset();

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(60));
    out.push('\n');
    out.push_str(&format!(
        "{}-{} 24h Ticker at {}\n",
        base,
        quote,
        format::timestamp(at)
    ));
    out.push_str(&format::rule(60));
    out.push_str("\n\n");

    out.push_str(&format!("Last Price:        ${}\n", format::dec(ticker.last, 4)));
    out.push_str(&format!("24h High:          ${}\n", format::dec(ticker.high, 4)));
    out.push_str(&format!("24h Low:           ${}\n", format::dec(ticker.low, 4)));
    out.push_str(&format!(
        "24h Volume ({}):  {}\n",
        base,
        format::grouped(ticker.volume, 2)
    ));
    out.push_str(&format!(
        "24h Change %:      {}%\n",
        format::dec(ticker.change_pct, 2)
    ));
    out.push_str(&format!("Buy Price:         ${}\n", format::dec(ticker.buy, 4)));
    out.push_str(&format!("Sell Price:        ${}\n", format::dec(ticker.sell, 4)));

    out.push('\n');
    out.push_str(&format::rule(60));
    out.push_str("\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_ticker() -> TickerSnapshot {
        TickerSnapshot {
            symbol: config::MARKET.to_string(),
            last: dec!(0.0510),
            high: dec!(0.0550),
            low: dec!(0.0480),
            volume: dec!(123456.78),
            change_pct: dec!(-2.15),
            buy: dec!(0.0500),
            sell: dec!(0.0520),
        }
    }

    #[test]
    fn test_render_reproduces_every_field() {
        let report = render_ticker(&sample_ticker(), Utc::now());
        assert!(report.contains("Last Price:        $0.0510"));
        assert!(report.contains("24h High:          $0.0550"));
        assert!(report.contains("24h Low:           $0.0480"));
        assert!(report.contains("24h Volume (MCM):  123,456.78"));
        assert!(report.contains("24h Change %:      -2.15%"));
        assert!(report.contains("Buy Price:         $0.0500"));
        assert!(report.contains("Sell Price:        $0.0520"));
    }

    #[test]
    fn test_render_header_names_the_pair() {
        let report = render_ticker(&sample_ticker(), Utc::now());
        assert!(report.contains("MCM-USDT 24h Ticker at "));
    }
}
