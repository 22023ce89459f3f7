//! # Watch Subcommand
//!
//! Runs the scan scheduler against a snapshot file until interrupted.
//! The snapshot is loaded once; scans operate on the in-memory copy, so
//! this mode is a monitoring driver, not a persistence daemon.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use tokio::sync::watch;

use regflow_monitor::{DeadlineScanner, ScanScheduler};

use crate::snapshot;

/// Arguments for the watch subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to the regulation snapshot file (JSON array).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Frequent-scan cadence in seconds.
    #[arg(long, default_value_t = 3600)]
    pub interval_secs: u64,

    /// Daily-scan cadence in seconds.
    #[arg(long)]
    pub daily_secs: Option<u64>,
}

pub fn run(args: &WatchArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(run_inner(args))
}

async fn run_inner(args: &WatchArgs) -> anyhow::Result<()> {
    let store = Arc::new(snapshot::load_store(&args.snapshot)?);
    let scanner = Arc::new(DeadlineScanner::new(store.clone(), store.clone()));

    let mut scheduler = ScanScheduler::new(scanner, Duration::from_secs(args.interval_secs));
    if let Some(daily) = args.daily_secs {
        scheduler = scheduler.with_daily(Duration::from_secs(daily));
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(async move { scheduler.run(shutdown_rx).await });

    tracing::info!(
        snapshot = %args.snapshot.display(),
        interval_secs = args.interval_secs,
        "watching for deadlines; press ctrl-c to stop"
    );
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for interrupt")?;
    tracing::info!("interrupt received, stopping");

    let _ = shutdown_tx.send(true);
    task.await.context("scheduler task panicked")?;
    Ok(())
}
