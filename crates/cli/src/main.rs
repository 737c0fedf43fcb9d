use clap::{Parser, Subcommand};
use trade_ledger_core::ConfigLoader;
use trade_ledger_data::{Database, TradeRepository};
use trade_ledger_web_api::ApiServer;

#[derive(Parser)]
#[command(name = "trade-ledger")]
#[command(about = "Record-keeping service for commodity trades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the trade ledger API server
    Serve {
        /// Config profile (e.g. "dev" also loads config/Config.dev.toml)
        #[arg(short, long)]
        profile: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Serve { profile } => serve(profile.as_deref()).await?,
    }

    Ok(())
}

async fn serve(profile: Option<&str>) -> anyhow::Result<()> {
    let config = match profile {
        Some(p) => ConfigLoader::load_with_profile(p)?,
        None => ConfigLoader::load()?,
    };

    tracing::info!("using database at {}", config.database.url);
    let database =
        Database::connect(&config.database.url, config.database.max_connections).await?;
    let repo = TradeRepository::new(database.pool().clone());

    ApiServer::new(repo).serve(&config.server.bind_addr()).await
}
