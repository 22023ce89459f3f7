//! # Snapshot and Roles File Loading
//!
//! The CLI works against two JSON files: a snapshot of the regulation
//! collection (array of documents in the stored shape) and an optional
//! roles file mapping actor UUIDs to their role and display name.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use uuid::Uuid;

use regflow_core::{ActorId, Role};
use regflow_service::StaticRoles;
use regflow_store::{MemoryStore, RegulationStore};

/// Load a snapshot file into an in-memory store.
///
/// Malformed documents are loaded as-is; they surface per-document when
/// a command tries to decode them.
pub fn load_store(path: &Path) -> anyhow::Result<MemoryStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let documents: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("snapshot {} is not a JSON array", path.display()))?;
    let store = MemoryStore::from_snapshot(documents)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    Ok(store)
}

/// Write the store's documents back to the snapshot file.
pub fn save_store(path: &Path, store: &MemoryStore) -> anyhow::Result<()> {
    let bodies: Vec<serde_json::Value> = store
        .documents()
        .context("failed to read documents from store")?
        .into_iter()
        .map(|doc| doc.body)
        .collect();
    let rendered = serde_json::to_string_pretty(&bodies).context("failed to encode snapshot")?;
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleRecord {
    actor_id: Uuid,
    role: Role,
    #[serde(default)]
    name: Option<String>,
}

/// Load a roles file: a JSON array of `{actorId, role, name?}` records.
pub fn load_roles(path: &Path) -> anyhow::Result<StaticRoles> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roles file {}", path.display()))?;
    let records: Vec<RoleRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("roles file {} is not a JSON array", path.display()))?;

    let mut roles = StaticRoles::new();
    for record in records {
        let actor = ActorId(record.actor_id);
        roles = match record.name {
            Some(name) => roles.with_named(actor, record.role, name),
            None => roles.with(actor, record.role),
        };
    }
    Ok(roles)
}

/// Parse a bare UUID argument.
pub fn parse_uuid(s: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(s).with_context(|| format!("invalid UUID: {s:?}"))
}
