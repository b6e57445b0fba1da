//! Load generator.
//!
//! Issues synthetic traffic against a running server over plain HTTP: the
//! id population is fetched once from `GET /players`, then each worker loops
//! a weighted task mix of two stat reads for every match submission, with
//! uniformly random results. Match submissions sample two distinct players.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Client;
use tokio::time::Instant;

use matchboard_core::MatchOutcome;

/// Arguments for the load command
#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Base URL of a running matchboard server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub host: String,

    /// Number of concurrent workers
    #[arg(long, short = 'c', default_value_t = 8)]
    pub concurrency: u32,

    /// Total number of requests to issue
    #[arg(long, short = 'n', default_value_t = 1000)]
    pub requests: u64,

    /// Stop after this many seconds even if requests remain
    #[arg(long)]
    pub duration: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Suppress the progress bar (for script consumption)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Default)]
struct Counters {
    issued: AtomicU64,
    stat_reads: AtomicU64,
    matches_submitted: AtomicU64,
    failures: AtomicU64,
}

/// One worker's next action, decided before any await so the thread-local
/// rng never lives across a suspension point.
enum LoadTask {
    ReadStats { player_id: i32 },
    SubmitMatch(MatchOutcome),
}

/// Run the load generator
pub async fn run_load(args: LoadArgs) -> Result<()> {
    let host = args.host.trim_end_matches('/').to_string();
    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .context("Failed to build HTTP client")?;

    // Learn the id population once, before any workers start
    let ids: Vec<i32> = client
        .get(format!("{host}/players"))
        .send()
        .await
        .context("Failed to fetch player ids - is the server running?")?
        .error_for_status()
        .context("GET /players failed")?
        .json()
        .await
        .context("GET /players returned malformed ids")?;

    if ids.len() < 2 {
        bail!("need at least 2 players to generate matches, found {}", ids.len());
    }
    tracing::info!(players = ids.len(), "player population loaded");

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(args.requests);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {per_sec} {msg}")
                .expect("static template is valid"),
        );
        bar
    };

    let ids = Arc::new(ids);
    let counters = Arc::new(Counters::default());
    let deadline = args
        .duration
        .map(|secs| Instant::now() + Duration::from_secs(secs));

    let workers: Vec<_> = (0..args.concurrency)
        .map(|_| {
            let client = client.clone();
            let host = host.clone();
            let ids = Arc::clone(&ids);
            let counters = Arc::clone(&counters);
            let bar = bar.clone();
            let total = args.requests;

            tokio::spawn(async move {
                loop {
                    let seq = counters.issued.fetch_add(1, Ordering::Relaxed);
                    if seq >= total {
                        break;
                    }
                    if let Some(deadline) = deadline {
                        if Instant::now() >= deadline {
                            break;
                        }
                    }

                    let task = decide_task(&ids);
                    let outcome = run_task(&client, &host, task).await;

                    match outcome {
                        Ok(TaskKind::ReadStats) => {
                            counters.stat_reads.fetch_add(1, Ordering::Relaxed);
                        }
                        Ok(TaskKind::SubmitMatch) => {
                            counters.matches_submitted.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(err) => {
                            counters.failures.fetch_add(1, Ordering::Relaxed);
                            tracing::debug!("request failed: {err:#}");
                        }
                    }
                    bar.inc(1);
                }
            })
        })
        .collect();

    for worker in workers {
        worker.await.expect("worker panicked");
    }
    bar.finish_and_clear();

    let stat_reads = counters.stat_reads.load(Ordering::Relaxed);
    let matches_submitted = counters.matches_submitted.load(Ordering::Relaxed);
    let failures = counters.failures.load(Ordering::Relaxed);
    tracing::info!(stat_reads, matches_submitted, failures, "load run complete");
    println!(
        "Completed {} requests: {stat_reads} stat reads, {matches_submitted} matches, {failures} failures",
        stat_reads + matches_submitted + failures
    );

    if failures > 0 {
        bail!("{failures} requests failed");
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum TaskKind {
    ReadStats,
    SubmitMatch,
}

/// Weighted task mix: two stat reads for every match submission.
fn decide_task(ids: &[i32]) -> LoadTask {
    let mut rng = rand::thread_rng();

    if rng.gen_range(0..3) < 2 {
        let player_id = *ids.choose(&mut rng).expect("population is non-empty");
        LoadTask::ReadStats { player_id }
    } else {
        let pair: Vec<i32> = ids.choose_multiple(&mut rng, 2).copied().collect();
        LoadTask::SubmitMatch(MatchOutcome {
            player1_id: pair[0],
            player2_id: pair[1],
            match_result: rng.gen_range(1..=3),
        })
    }
}

async fn run_task(client: &Client, host: &str, task: LoadTask) -> Result<TaskKind> {
    match task {
        LoadTask::ReadStats { player_id } => {
            client
                .get(format!("{host}/players/{player_id}"))
                .send()
                .await?
                .error_for_status()?;
            Ok(TaskKind::ReadStats)
        }
        LoadTask::SubmitMatch(outcome) => {
            client
                .put(format!("{host}/match"))
                .json(&outcome)
                .send()
                .await?
                .error_for_status()?;
            Ok(TaskKind::SubmitMatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_submissions_use_distinct_players() {
        let ids = vec![1, 2, 3, 4, 5];
        for _ in 0..256 {
            if let LoadTask::SubmitMatch(outcome) = decide_task(&ids) {
                assert_ne!(outcome.player1_id, outcome.player2_id);
                assert!((1..=3).contains(&outcome.match_result));
            }
        }
    }

    #[test]
    fn reads_sample_known_ids() {
        let ids = vec![7, 9];
        for _ in 0..64 {
            if let LoadTask::ReadStats { player_id } = decide_task(&ids) {
                assert!(ids.contains(&player_id));
            }
        }
    }
}
