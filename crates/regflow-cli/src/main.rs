//! # regflow CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Regulation approval tracker CLI.
///
/// Tracks regulation documents through draft, review, approval, and
/// publication; scans for approaching and missed deadlines; and reports
/// per-stage turnaround times.
#[derive(Parser, Debug)]
#[command(name = "regflow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Submit or resubmit a regulation for review.
    Submit(regflow_cli::lifecycle::SubmitArgs),
    /// Approve or deny a regulation under review.
    Review(regflow_cli::lifecycle::ReviewArgs),
    /// Publish an approved regulation.
    Publish(regflow_cli::lifecycle::PublishArgs),
    /// Assign a reviewer to a regulation.
    Assign(regflow_cli::lifecycle::AssignArgs),
    /// Run one deadline scan pass and print the reminder batch.
    Scan(regflow_cli::monitor::ScanArgs),
    /// List regulations past their deadline.
    Overdue(regflow_cli::monitor::OverdueArgs),
    /// List regulations with deadlines inside a horizon.
    Upcoming(regflow_cli::monitor::UpcomingArgs),
    /// Per-stage elapsed-time breakdown for one regulation.
    Sla(regflow_cli::monitor::SlaArgs),
    /// Run the scan scheduler until interrupted.
    Watch(regflow_cli::watch::WatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit(args) => regflow_cli::lifecycle::run_submit(&args),
        Commands::Review(args) => regflow_cli::lifecycle::run_review(&args),
        Commands::Publish(args) => regflow_cli::lifecycle::run_publish(&args),
        Commands::Assign(args) => regflow_cli::lifecycle::run_assign(&args),
        Commands::Scan(args) => regflow_cli::monitor::run_scan(&args),
        Commands::Overdue(args) => regflow_cli::monitor::run_overdue(&args),
        Commands::Upcoming(args) => regflow_cli::monitor::run_upcoming(&args),
        Commands::Sla(args) => regflow_cli::monitor::run_sla(&args),
        Commands::Watch(args) => regflow_cli::watch::run(&args),
    }
}
