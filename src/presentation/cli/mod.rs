pub mod books;
pub mod import;
mod macros;
pub mod recommendations;
pub mod stats;

use std::net::SocketAddr;

use books::BookCommands;
use clap::{Args, Parser, Subcommand};
use import::ImportCommand;
use recommendations::RecommendationCommands;
use stats::StatsCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Summarise a personal reading log", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "READSTATS_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Print reading statistics
    Stats(StatsCommand),

    /// Manage finished books
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },

    /// Replace all books with the rows in a JSON export
    Import(ImportCommand),

    /// Show or store daily recommendations
    Recommendation {
        #[command(subcommand)]
        command: RecommendationCommands,
    },
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(
        long,
        env = "READSTATS_DATABASE_URL",
        default_value = "sqlite://readstats.db"
    )]
    pub database_url: String,

    #[arg(long, env = "READSTATS_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
