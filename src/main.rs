use anyhow::Result;
use clap::Parser;
use readstats::application::{ServerConfig, serve};
use readstats::infrastructure::client::ReadstatsClient;
use readstats::presentation::cli::{
    Cli, Commands, ServeCommand, books, import, recommendations, stats,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => run_server(cmd).await,
        Commands::Stats(cmd) => {
            let client = ReadstatsClient::from_base_url(&cli.api_url)?;
            stats::run(&client, cmd).await
        }
        Commands::Book { command } => {
            let client = ReadstatsClient::from_base_url(&cli.api_url)?;
            books::run(&client, command).await
        }
        Commands::Import(cmd) => {
            let client = ReadstatsClient::from_base_url(&cli.api_url)?;
            import::run(&client, cmd).await
        }
        Commands::Recommendation { command } => {
            let client = ReadstatsClient::from_base_url(&cli.api_url)?;
            recommendations::run(&client, command).await
        }
    }
}

async fn run_server(command: ServeCommand) -> Result<()> {
    let config = ServerConfig {
        bind_address: command.bind_address,
        database_url: command.database_url,
    };

    serve(config).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    // Logs go to stderr so command output on stdout stays machine-readable.
    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
