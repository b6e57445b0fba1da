//! Bulk synthetic-player seeding.
//!
//! Generates "FirstName, the Epithet" names and inserts them directly into
//! the database, skipping collisions. The word lists are small, so large
//! counts mostly exercise the conflict-skip path - that is fine for load
//! fixtures.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use matchboard_core::roster::synthetic_name;
use matchboard_server::config::resolve_database_url;
use matchboard_server::db::{create_pool, migrations, PlayerRepo};

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Number of synthetic players to attempt to insert
    #[arg(long, short = 'n', default_value_t = 1000)]
    pub count: u32,

    /// Database URL (overrides DATABASE_URL / INSTANCE_HOST resolution)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Suppress the progress bar (for script consumption)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Insert synthetic players
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => resolve_database_url().context("database connection not configured")?,
    };

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(args.count as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static template is valid"),
        );
        bar
    };

    let repo = PlayerRepo::new(&pool);
    let mut inserted = 0u32;
    let mut skipped = 0u32;

    for _ in 0..args.count {
        let name = {
            let mut rng = rand::thread_rng();
            synthetic_name(&mut rng)
        };

        if repo.insert_name(&name).await.context("insert failed")? {
            inserted += 1;
        } else {
            tracing::debug!(%name, "name collision, skipping");
            skipped += 1;
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    tracing::info!(inserted, skipped, "seeding complete");
    println!("Inserted {inserted} players ({skipped} name collisions skipped)");

    Ok(())
}
