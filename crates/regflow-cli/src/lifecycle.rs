//! # Lifecycle Subcommands
//!
//! Submit, review, publish, and assign-reviewer against a snapshot
//! file. Each command loads the snapshot, applies one transition, and
//! writes the snapshot back; the updated document is printed to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use regflow_core::{ActorId, RegulationId, Timestamp};
use regflow_service::{
    assign_reviewer, publish_regulation, review_regulation, submit_regulation, ReviewDecision,
};
use regflow_state::Regulation;

use crate::snapshot;

/// Shared arguments for lifecycle commands.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to the regulation snapshot file (JSON array).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Path to the roles file (JSON array of {actorId, role, name?}).
    #[arg(long)]
    pub roles: PathBuf,

    /// Regulation UUID.
    #[arg(long)]
    pub id: String,

    /// Acting user UUID.
    #[arg(long)]
    pub actor: String,

    /// Override the transition instant (RFC 3339 with Z suffix).
    /// Defaults to the current time.
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the submit subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the review subcommand.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// The verdict.
    #[arg(long, value_enum)]
    pub decision: Decision,

    /// Reviewer feedback (required on both verdicts).
    #[arg(long)]
    pub feedback: String,

    /// Resubmission deadline (RFC 3339 with Z suffix). Required when
    /// denying.
    #[arg(long)]
    pub revision_deadline: Option<String>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Decision {
    Approve,
    Deny,
}

/// Arguments for the publish subcommand.
#[derive(Args, Debug)]
pub struct PublishArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Release notes recorded in the version history.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the assign subcommand.
#[derive(Args, Debug)]
pub struct AssignArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// UUID of the reviewer to assign.
    #[arg(long)]
    pub reviewer: String,
}

pub fn run_submit(args: &SubmitArgs) -> anyhow::Result<()> {
    let ctx = LoadedCommand::load(&args.common)?;
    let updated = submit_regulation(&ctx.store, &ctx.roles, &ctx.id, &ctx.actor, ctx.now)?;
    ctx.finish(&args.common.snapshot, &updated)
}

pub fn run_review(args: &ReviewArgs) -> anyhow::Result<()> {
    let ctx = LoadedCommand::load(&args.common)?;
    let decision = match args.decision {
        Decision::Approve => ReviewDecision::Approve,
        Decision::Deny => ReviewDecision::Deny,
    };
    let revision_deadline = args
        .revision_deadline
        .as_deref()
        .map(Timestamp::parse)
        .transpose()
        .context("invalid --revision-deadline")?;

    let updated = review_regulation(
        &ctx.store,
        &ctx.roles,
        &ctx.id,
        &ctx.actor,
        decision,
        &args.feedback,
        revision_deadline,
        ctx.now,
    )?;
    ctx.finish(&args.common.snapshot, &updated)
}

pub fn run_publish(args: &PublishArgs) -> anyhow::Result<()> {
    let ctx = LoadedCommand::load(&args.common)?;
    let updated = publish_regulation(
        &ctx.store,
        &ctx.roles,
        &ctx.id,
        &ctx.actor,
        args.notes.as_deref(),
        ctx.now,
    )?;
    ctx.finish(&args.common.snapshot, &updated)
}

pub fn run_assign(args: &AssignArgs) -> anyhow::Result<()> {
    let ctx = LoadedCommand::load(&args.common)?;
    let reviewer = ActorId(snapshot::parse_uuid(&args.reviewer)?);
    let updated = assign_reviewer(&ctx.store, &ctx.roles, &ctx.id, &ctx.actor, &reviewer, ctx.now)?;
    ctx.finish(&args.common.snapshot, &updated)
}

/// Everything a lifecycle command needs once the files are loaded.
struct LoadedCommand {
    store: regflow_store::MemoryStore,
    roles: regflow_service::StaticRoles,
    id: RegulationId,
    actor: ActorId,
    now: Timestamp,
}

impl LoadedCommand {
    fn load(common: &CommonArgs) -> anyhow::Result<Self> {
        Ok(Self {
            store: snapshot::load_store(&common.snapshot)?,
            roles: snapshot::load_roles(&common.roles)?,
            id: RegulationId(snapshot::parse_uuid(&common.id)?),
            actor: ActorId(snapshot::parse_uuid(&common.actor)?),
            now: effective_now(common.at.as_deref())?,
        })
    }

    /// Persist the snapshot and print the updated document.
    fn finish(&self, path: &std::path::Path, updated: &Regulation) -> anyhow::Result<()> {
        snapshot::save_store(path, &self.store)?;
        let rendered =
            serde_json::to_string_pretty(updated).context("failed to render document")?;
        println!("{rendered}");
        Ok(())
    }
}

fn effective_now(at: Option<&str>) -> anyhow::Result<Timestamp> {
    match at {
        Some(s) => Timestamp::parse(s).context("invalid --at timestamp"),
        None => Ok(Timestamp::now()),
    }
}
