//! # Review Decision Handler
//!
//! A reviewer either approves (→ pending publish) or denies (→ needs
//! revision, with a mandatory revision deadline). Feedback is required
//! on both branches; the deadline requirement on denial is enforced
//! here even though the UI validates it too, so the invariant has one
//! authoritative home.

use regflow_core::{ActorId, RegulationId, Timestamp};
use regflow_state::Regulation;
use regflow_store::RegulationStore;

use crate::error::ServiceError;
use crate::roles::RoleDirectory;

/// The reviewer's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Move the document to pending publish.
    Approve,
    /// Send the document back for revision.
    Deny,
}

/// Apply a reviewer decision to a regulation.
///
/// # Errors
///
/// - [`ServiceError::Forbidden`] unless the actor's role can review.
/// - [`ServiceError::Validation`] on empty feedback, on denial without a
///   revision deadline, or when the document is not awaiting review.
/// - [`ServiceError::NotFound`] if the regulation does not exist.
pub fn review_regulation(
    store: &dyn RegulationStore,
    roles: &dyn RoleDirectory,
    id: &RegulationId,
    reviewer: &ActorId,
    decision: ReviewDecision,
    feedback: &str,
    revision_deadline: Option<Timestamp>,
    now: Timestamp,
) -> Result<Regulation, ServiceError> {
    let role = crate::resolve_role(roles, reviewer)?;
    if !role.can_review() {
        return Err(ServiceError::Forbidden(format!(
            "role {role} cannot issue review decisions"
        )));
    }
    if feedback.trim().is_empty() {
        return Err(ServiceError::Validation(
            "review feedback must not be empty".to_string(),
        ));
    }

    let mut regulation = crate::fetch(store, id)?;
    match decision {
        ReviewDecision::Approve => {
            let reviewer_name = roles.display_name(reviewer)?;
            regulation.approve(reviewer, role, reviewer_name, feedback, now)?;
        }
        ReviewDecision::Deny => {
            let deadline = revision_deadline.ok_or_else(|| {
                ServiceError::Validation(
                    "a revision deadline is required when denying".to_string(),
                )
            })?;
            regulation.deny(reviewer, role, feedback, deadline, now)?;
        }
    }
    store.update(id, &regulation)?;

    tracing::info!(
        regulation = %id,
        reviewer = %reviewer,
        decision = ?decision,
        status = %regulation.status,
        "review decision recorded"
    );
    Ok(regulation)
}
