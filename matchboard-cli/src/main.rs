//! matchboard CLI - leaderboard service, seeding, and load generation
//!
//! Entry point for the matchboard binary:
//! - `serve`: run the HTTP service (migrates and seeds before binding)
//! - `seed`: bulk-insert synthetic players
//! - `load`: generate synthetic match traffic against a running server

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "matchboard",
    author,
    version,
    about = "Player leaderboard service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve(commands::serve::ServeArgs),
    /// Bulk-insert synthetic players
    Seed(commands::seed::SeedArgs),
    /// Generate synthetic traffic against a running server
    Load(commands::load::LoadArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Seed(args) => commands::seed::run_seed(args).await,
        Commands::Load(args) => commands::load::run_load(args).await,
    }
}
