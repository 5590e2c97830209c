use biconomy_monitor::cli::{self, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; reports own stdout
    biconomy_monitor::telemetry::init_telemetry()?;

    match cli.command {
        Commands::Orderbook => cli::orderbook::execute().await?,
        Commands::Ticker => cli::ticker::execute().await?,
        Commands::Trades => cli::trades::execute().await?,
        Commands::Time => cli::time::execute().await?,
        Commands::Balance => cli::balance::execute().await?,
        Commands::Orders => cli::orders::execute().await?,
        Commands::History => cli::history::execute().await?,
    }

    Ok(())
}
