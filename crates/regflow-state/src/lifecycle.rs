//! # Regulation Lifecycle Transitions
//!
//! The validated transitions of the approval state machine, implemented
//! as methods on [`Regulation`]. Each transition checks the current
//! status, stamps the stage timestamps, and appends a history entry.
//!
//! Payload validation (non-empty feedback, deadline presence on denial)
//! and role gating happen in `regflow-service`; this module enforces
//! only what can be decided from the document itself: which statuses
//! each transition is legal from.

use thiserror::Error;

use regflow_core::{ActorId, RegulationStatus, Role, Timestamp};

use crate::regulation::{HistoryAction, HistoryEntry, Regulation, Stage, VersionEntry};

/// Errors that can occur during lifecycle transitions.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Attempted transition is not valid from the current status.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },

    /// The regulation is published and cannot transition further.
    #[error("regulation {id} is published and cannot transition")]
    AlreadyPublished {
        /// The regulation identifier.
        id: String,
    },
}

impl Regulation {
    /// Submit or resubmit for review (Draft/Needs Revision → Pending Review).
    ///
    /// Resubmission after a revision request is the same transition; it
    /// records a `resubmitted` history entry and preserves the original
    /// `submitted_at` so SLA review-stage math stays anchored to the
    /// first submission.
    pub fn submit(
        &mut self,
        actor: &ActorId,
        actor_role: Option<Role>,
        now: Timestamp,
    ) -> Result<(), LifecycleError> {
        self.require_status(
            &[RegulationStatus::Draft, RegulationStatus::NeedsRevision],
            RegulationStatus::PendingReview,
        )?;
        let action = if self.status == RegulationStatus::NeedsRevision {
            HistoryAction::Resubmitted
        } else {
            HistoryAction::Submitted
        };

        self.status = RegulationStatus::PendingReview;
        if self.submitted_at.is_none() {
            self.submitted_at = Some(now);
        }
        self.workflow.advance(Stage::Draft, Stage::Review, now);
        self.touch(now);
        self.record(action, *actor, actor_role, now, None);
        Ok(())
    }

    /// Reviewer approval (Pending Review/Needs Revision → Pending Publish).
    ///
    /// Leaves any existing `revision_deadline` untouched — an approval
    /// after a revision round does not erase the record of the deadline
    /// that was set.
    pub fn approve(
        &mut self,
        reviewer: &ActorId,
        role: Role,
        reviewer_name: Option<String>,
        feedback: &str,
        now: Timestamp,
    ) -> Result<(), LifecycleError> {
        self.require_status(
            &[RegulationStatus::PendingReview, RegulationStatus::NeedsRevision],
            RegulationStatus::PendingPublish,
        )?;

        self.status = RegulationStatus::PendingPublish;
        self.reviewed_at = Some(now);
        self.reviewer_name = reviewer_name;
        self.feedback = Some(feedback.to_string());
        self.workflow.advance(Stage::Review, Stage::Approval, now);
        self.touch(now);
        self.record(
            HistoryAction::ReviewerApproved,
            *reviewer,
            Some(role),
            now,
            Some(feedback.to_string()),
        );
        Ok(())
    }

    /// Reviewer denial (Pending Review/Needs Revision → Needs Revision).
    ///
    /// Overwrites any prior revision deadline with the supplied one. The
    /// workflow stays in the review stage awaiting resubmission.
    pub fn deny(
        &mut self,
        reviewer: &ActorId,
        role: Role,
        feedback: &str,
        revision_deadline: Timestamp,
        now: Timestamp,
    ) -> Result<(), LifecycleError> {
        self.require_status(
            &[RegulationStatus::PendingReview, RegulationStatus::NeedsRevision],
            RegulationStatus::NeedsRevision,
        )?;

        self.status = RegulationStatus::NeedsRevision;
        self.reviewed_at = Some(now);
        self.revision_deadline = Some(revision_deadline);
        self.feedback = Some(feedback.to_string());
        self.touch(now);
        self.record(
            HistoryAction::ReviewerRejected,
            *reviewer,
            Some(role),
            now,
            Some(feedback.to_string()),
        );
        Ok(())
    }

    /// Admin publication (Pending Publish → Published).
    ///
    /// Closes the approval and publish stages at the same instant, bumps
    /// the version, and appends a version-history entry recording the
    /// superseded version number.
    pub fn publish(
        &mut self,
        admin: &ActorId,
        role: Role,
        version_notes: Option<&str>,
        now: Timestamp,
    ) -> Result<(), LifecycleError> {
        self.require_status(&[RegulationStatus::PendingPublish], RegulationStatus::Published)?;

        self.version_history.push(VersionEntry {
            version: self.version,
            updated_at: now,
            notes: version_notes.unwrap_or("Initial publication").to_string(),
            status: "published".to_string(),
        });
        self.version += 1;
        self.status = RegulationStatus::Published;
        if self.approved_at.is_none() {
            self.approved_at = Some(now);
        }
        self.published_at = Some(now);
        self.is_active = true;
        self.workflow.advance(Stage::Approval, Stage::Publish, now);
        self.workflow.complete(Stage::Publish, now);
        self.touch(now);
        self.record(HistoryAction::Published, *admin, Some(role), now, None);
        Ok(())
    }

    /// Admin reviewer assignment, forcing the document to Pending Review.
    ///
    /// A forced (re)submission on the employee's behalf: legal from any
    /// non-published status, stamping `submitted_at` only if unset.
    pub fn assign_reviewer(
        &mut self,
        admin: &ActorId,
        role: Role,
        reviewer: ActorId,
        now: Timestamp,
    ) -> Result<(), LifecycleError> {
        if self.status.is_terminal() {
            return Err(LifecycleError::AlreadyPublished {
                id: self.id.to_string(),
            });
        }

        self.assigned_reviewer = Some(reviewer);
        self.status = RegulationStatus::PendingReview;
        if self.submitted_at.is_none() {
            self.submitted_at = Some(now);
        }
        self.workflow.advance(Stage::Draft, Stage::Review, now);
        // Forcing a pending-publish document back into review must not
        // leave the approval stage marked active.
        self.workflow.reset(Stage::Approval);
        self.touch(now);
        self.record(
            HistoryAction::ReviewerAssigned,
            *admin,
            Some(role),
            now,
            Some(reviewer.to_string()),
        );
        Ok(())
    }

    /// Validate that the current status allows the requested transition.
    fn require_status(
        &self,
        allowed: &[RegulationStatus],
        target: RegulationStatus,
    ) -> Result<(), LifecycleError> {
        if self.status.is_terminal() {
            return Err(LifecycleError::AlreadyPublished {
                id: self.id.to_string(),
            });
        }
        if !allowed.contains(&self.status) {
            return Err(LifecycleError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    /// Append a history entry. History is append-only by construction.
    fn record(
        &mut self,
        action: HistoryAction,
        actor_id: ActorId,
        actor_role: Option<Role>,
        timestamp: Timestamp,
        note: Option<String>,
    ) {
        self.history.push(HistoryEntry {
            action,
            actor_id,
            actor_role,
            timestamp,
            note,
        });
    }
}
