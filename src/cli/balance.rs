//! `balance` subcommand: account balances (signed request)

use chrono::{DateTime, Utc};

use crate::account::AssetBalance;
use crate::cli::format;
use crate::config::{self, Credentials};
use crate::exchange::{BiconomyAuth, BiconomyClient};

pub async fn execute() -> anyhow::Result<()> {
    // Credentials are checked before any network I/O
    let credentials = Credentials::from_env()?;

    println!("Fetching account balances from Biconomy...");
    let client = BiconomyClient::with_auth(BiconomyAuth::new(credentials));
    let balances = client.fetch_balances().await?;
    print!("{}", render_balances(&balances, Utc::now()));
    Ok(())
}

/// Render the non-zero balances table, then a key-balances section for the
/// monitored market's base and quote assets. An account holding nothing
/// renders an empty table, not an error.
pub fn render_balances(balances: &[AssetBalance], at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(70));
    out.push('\n');
    out.push_str(&format!("Account Balances at {}\n", format::timestamp(at)));
    out.push_str(&format::rule(70));
    out.push_str("\n\n");

    out.push_str(&format!(
        "{:<10} {:<20} {:<20} {:<20}\n",
        "Asset", "Available", "Freeze", "Total"
    ));
    out.push_str(&format::dash(70));
    out.push('\n');

    for balance in balances.iter().filter(|b| !b.is_empty()) {
        out.push_str(&format!(
            "{:<10} {:<20} {:<20} {:<20}\n",
            balance.asset,
            format::dec(balance.available, 8),
            format::dec(balance.frozen, 8),
            format::dec(balance.total(), 8)
        ));
    }

    out.push('\n');
    out.push_str(&format::rule(70));
    out.push_str("\n\n");

    let base = balances.iter().find(|b| b.asset == config::base_asset());
    let quote = balances.iter().find(|b| b.asset == config::quote_asset());

    if base.is_some() || quote.is_some() {
        out.push_str("Key Balances for Market Making:\n");
        out.push_str(&format::dash(70));
        out.push('\n');
        if let Some(b) = base {
            out.push_str(&format!(
                "{}:  Available={}, Freeze={}, Total={}\n",
                b.asset,
                format::grouped(b.available, 2),
                format::grouped(b.frozen, 2),
                format::grouped(b.total(), 2)
            ));
        }
        if let Some(q) = quote {
            out.push_str(&format!(
                "{}: Available=${}, Freeze=${}, Total=${}\n",
                q.asset,
                format::grouped(q.available, 2),
                format::grouped(q.frozen, 2),
                format::grouped(q.total(), 2)
            ));
        }
        out.push('\n');
    }

    out
}
