//! # regflow-service — Approval Operation Handlers
//!
//! The semantic operation surface consumed by whatever transport sits
//! above (HTTP, CLI — out of scope here). Each handler is a short-lived
//! read-modify-write unit: fetch the document, run the lifecycle
//! transition, write it back under the store's per-document atomicity.
//!
//! Authorization is enforced here, not in the state machine: review
//! decisions require a reviewing role, publication and reviewer
//! assignment require admin. Submission is permitted for any authenticated actor —
//! ownership checks belong to the caller.
//!
//! There is no optimistic-concurrency retry: a last-writer-wins race
//! between a reviewer decision and a concurrent edit is an accepted
//! limitation of the store contract.

pub mod assign;
pub mod error;
pub mod publish;
pub mod review;
pub mod roles;
pub mod submit;

pub use assign::assign_reviewer;
pub use error::ServiceError;
pub use publish::publish_regulation;
pub use review::{review_regulation, ReviewDecision};
pub use roles::{RoleDirectory, StaticRoles};
pub use submit::submit_regulation;

use regflow_core::{ActorId, RegulationId, Role};
use regflow_state::Regulation;
use regflow_store::{RegulationStore, StoreError};

/// Fetch a regulation, mapping a missing document to the caller-facing
/// not-found error instead of a generic store failure.
pub(crate) fn fetch(
    store: &dyn RegulationStore,
    id: &RegulationId,
) -> Result<Regulation, ServiceError> {
    store.get(id).map_err(|e| match e {
        StoreError::NotFound(msg) => ServiceError::NotFound(msg),
        other => ServiceError::Store(other),
    })
}

/// Resolve an actor's role, treating an unknown actor as forbidden.
pub(crate) fn resolve_role(
    roles: &dyn RoleDirectory,
    actor: &ActorId,
) -> Result<Role, ServiceError> {
    roles
        .role_of(actor)?
        .ok_or_else(|| ServiceError::Forbidden(format!("no role on record for {actor}")))
}
