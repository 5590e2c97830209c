//! `time` subcommand: server time and local clock drift
//!
//! Private requests are signed with local millisecond timestamps, so the
//! drift between the local clock and the exchange's is the one thing worth
//! checking before debugging a signature rejection.

use chrono::{DateTime, Utc};

use crate::cli::format;
use crate::exchange::BiconomyClient;

pub async fn execute() -> anyhow::Result<()> {
    println!("Fetching server time from Biconomy...");
    let client = BiconomyClient::new();
    let server = client.fetch_server_time().await?;
    print!("{}", render_time(server, Utc::now()));
    Ok(())
}

/// Render server time, local time, and their difference
pub fn render_time(server: DateTime<Utc>, local: DateTime<Utc>) -> String {
    let drift_secs = (local - server).num_milliseconds() as f64 / 1000.0;

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format::rule(60));
    out.push('\n');
    out.push_str("Biconomy Server Time\n");
    out.push_str(&format::rule(60));
    out.push_str("\n\n");

    out.push_str(&format!(
        "Server Time:  {} ({})\n",
        format::timestamp(server),
        server.timestamp()
    ));
    out.push_str(&format!("Local Time:   {}\n", format::timestamp(local)));
    out.push_str(&format!(
        "Clock Drift:  {:+.3}s (local - server)\n",
        drift_secs
    ));

    out.push('\n');
    out.push_str(&format::rule(60));
    out.push_str("\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_drift() {
        let server = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let local = DateTime::from_timestamp_millis(1_700_000_001_500).unwrap();
        let report = render_time(server, local);
        assert!(report.contains("Clock Drift:  +1.500s"));
        assert!(report.contains("(1700000000)"));
    }

    #[test]
    fn test_render_negative_drift() {
        let server = DateTime::from_timestamp_millis(1_700_000_002_000).unwrap();
        let local = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let report = render_time(server, local);
        assert!(report.contains("Clock Drift:  -2.000s"));
    }
}
