//! HTTP service command.
//!
//! Startup is deterministic: resolve config, connect the pool, run schema
//! migrations and roster seeding, and only then bind the listener. The
//! first request never pays initialization latency.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use matchboard_server::config::resolve_database_url;
use matchboard_server::db::{create_pool, migrations};
use matchboard_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides DATABASE_URL / INSTANCE_HOST resolution)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Run the HTTP service
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => resolve_database_url().context("database connection not configured")?,
    };

    tracing::info!("Starting matchboard server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
