//! # Monitoring Subcommands
//!
//! One-shot deadline scan plus the read-only reports: overdue listing,
//! upcoming-deadline listing, and the per-regulation SLA breakdown.
//! Output is JSON on stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use regflow_core::{RegulationId, Timestamp};
use regflow_monitor::{calculate_sla, overdue_regulations, upcoming_deadlines, DeadlineScanner};

use crate::snapshot;

/// Arguments for the scan subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to the regulation snapshot file (JSON array).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Override the scan instant (RFC 3339 with Z suffix). Defaults to
    /// the current time.
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the overdue subcommand.
#[derive(Args, Debug)]
pub struct OverdueArgs {
    /// Path to the regulation snapshot file (JSON array).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Override the query instant (RFC 3339 with Z suffix).
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the upcoming subcommand.
#[derive(Args, Debug)]
pub struct UpcomingArgs {
    /// Path to the regulation snapshot file (JSON array).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// How many days ahead to look.
    #[arg(long, default_value_t = 7)]
    pub horizon_days: i64,

    /// Override the query instant (RFC 3339 with Z suffix).
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the sla subcommand.
#[derive(Args, Debug)]
pub struct SlaArgs {
    /// Path to the regulation snapshot file (JSON array).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Regulation UUID.
    #[arg(long)]
    pub id: String,

    /// Override the evaluation instant (RFC 3339 with Z suffix).
    #[arg(long)]
    pub at: Option<String>,
}

pub fn run_scan(args: &ScanArgs) -> anyhow::Result<()> {
    let store = Arc::new(snapshot::load_store(&args.snapshot)?);
    let scanner = DeadlineScanner::new(store.clone(), store.clone());
    let report = scanner.scan(parse_at(args.at.as_deref())?)?;

    print_json(&serde_json::json!({
        "upcoming": report.upcoming,
        "overdue": report.overdue,
        "skipped": report.skipped,
    }))
}

pub fn run_overdue(args: &OverdueArgs) -> anyhow::Result<()> {
    let store = snapshot::load_store(&args.snapshot)?;
    let listing = overdue_regulations(&store, parse_at(args.at.as_deref())?)?;
    print_json(&listing)
}

pub fn run_upcoming(args: &UpcomingArgs) -> anyhow::Result<()> {
    let store = snapshot::load_store(&args.snapshot)?;
    let listing = upcoming_deadlines(&store, parse_at(args.at.as_deref())?, args.horizon_days)?;
    print_json(&listing)
}

pub fn run_sla(args: &SlaArgs) -> anyhow::Result<()> {
    let store = snapshot::load_store(&args.snapshot)?;
    let id = RegulationId(snapshot::parse_uuid(&args.id)?);
    let report = calculate_sla(&store, &id, parse_at(args.at.as_deref())?)?;
    print_json(&report)
}

fn parse_at(at: Option<&str>) -> anyhow::Result<Timestamp> {
    match at {
        Some(s) => Timestamp::parse(s).context("invalid --at timestamp"),
        None => Ok(Timestamp::now()),
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
