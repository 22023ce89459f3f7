//! # Assign-Reviewer Handler
//!
//! Admin-only operation that designates a reviewer and forces the
//! document into pending review — a (re)submission on the employee's
//! behalf. The target user must hold a reviewing role.

use regflow_core::{ActorId, RegulationId, Timestamp};
use regflow_state::Regulation;
use regflow_store::RegulationStore;

use crate::error::ServiceError;
use crate::roles::RoleDirectory;

/// Assign a reviewer to a regulation.
///
/// # Errors
///
/// - [`ServiceError::Forbidden`] unless the actor is an admin.
/// - [`ServiceError::NotFound`] if the regulation or target user is absent.
/// - [`ServiceError::Validation`] if the target user cannot review, or
///   the document is already published.
pub fn assign_reviewer(
    store: &dyn RegulationStore,
    roles: &dyn RoleDirectory,
    id: &RegulationId,
    admin: &ActorId,
    reviewer: &ActorId,
    now: Timestamp,
) -> Result<Regulation, ServiceError> {
    let role = crate::resolve_role(roles, admin)?;
    if !role.can_publish() {
        return Err(ServiceError::Forbidden(format!(
            "role {role} cannot assign reviewers"
        )));
    }

    let reviewer_role = roles
        .role_of(reviewer)?
        .ok_or_else(|| ServiceError::NotFound(format!("user {reviewer} not found")))?;
    if !reviewer_role.can_review() {
        return Err(ServiceError::Validation(format!(
            "user {reviewer} has role {reviewer_role} and cannot review"
        )));
    }

    let mut regulation = crate::fetch(store, id)?;
    regulation.assign_reviewer(admin, role, *reviewer, now)?;
    store.update(id, &regulation)?;

    tracing::info!(
        regulation = %id,
        admin = %admin,
        reviewer = %reviewer,
        "reviewer assigned"
    );
    Ok(regulation)
}
