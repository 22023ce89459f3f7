//! # Submit Handler
//!
//! Moves a draft (or revision-requested) regulation into review.
//! Submission is permitted for any authenticated actor — ownership is
//! the caller's concern — so the role lookup here only enriches the
//! history entry and is allowed to come back empty.

use regflow_core::{ActorId, RegulationId, Timestamp};
use regflow_state::Regulation;
use regflow_store::RegulationStore;

use crate::error::ServiceError;
use crate::roles::RoleDirectory;

/// Submit or resubmit a regulation for review.
///
/// Returns the updated document on success.
///
/// # Errors
///
/// - [`ServiceError::NotFound`] if the regulation does not exist.
/// - [`ServiceError::Validation`] if the current status does not allow
///   submission (already pending, pending publish, or published).
pub fn submit_regulation(
    store: &dyn RegulationStore,
    roles: &dyn RoleDirectory,
    id: &RegulationId,
    actor: &ActorId,
    now: Timestamp,
) -> Result<Regulation, ServiceError> {
    let mut regulation = crate::fetch(store, id)?;
    let actor_role = roles.role_of(actor)?;

    regulation.submit(actor, actor_role, now)?;
    store.update(id, &regulation)?;

    tracing::info!(
        regulation = %id,
        actor = %actor,
        status = %regulation.status,
        "regulation submitted for review"
    );
    Ok(regulation)
}
