use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hltb::cli::{commands, Cli, Commands};
use hltb::service::HowLongToBeatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let service = HowLongToBeatService::new();

    match cli.command {
        Commands::Search { query } => {
            commands::search(&service, &query.join(" "), cli.json).await?;
        }
        Commands::Detail { id } => {
            commands::detail(&service, &id, cli.json).await?;
        }
    }

    Ok(())
}
