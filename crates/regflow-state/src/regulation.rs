//! # Regulation Document Model
//!
//! The central entity of the tracker, mirroring the stored JSON shape
//! (camelCase field names, optional legacy fields). The lifecycle
//! transitions that mutate it live in [`crate::lifecycle`].
//!
//! ## Invariants
//!
//! - `history` is append-only: entries are pushed, never mutated or
//!   reordered.
//! - Stage timestamps are monotonic: each transition stamps `now` into
//!   the stage it activates and never rewinds an earlier stage.
//! - `created_by`, `ref_number`, and `created_at` are immutable after
//!   creation.

use serde::{Deserialize, Serialize};

use regflow_core::{ActorId, RefNumber, RegulationId, RegulationStatus, Role, Timestamp};

// ─── Workflow Stages ─────────────────────────────────────────────────

/// The four workflow stages a regulation moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Being authored.
    Draft,
    /// Under reviewer consideration.
    Review,
    /// Approved, awaiting admin publication.
    Approval,
    /// Published.
    Publish,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approval => "approval",
            Self::Publish => "publish",
        };
        f.write_str(s)
    }
}

/// Progress marker for one workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// Not yet reached.
    Pending,
    /// Currently in progress.
    Active,
    /// Finished.
    Completed,
}

/// One stage's status and activation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Progress of this stage.
    pub status: StageStatus,
    /// When the stage was activated, if it has been reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl StageRecord {
    fn pending() -> Self {
        Self {
            status: StageStatus::Pending,
            timestamp: None,
        }
    }

    fn active(now: Timestamp) -> Self {
        Self {
            status: StageStatus::Active,
            timestamp: Some(now),
        }
    }
}

/// The nested workflow record tracking per-stage progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// The stage the document is currently in.
    pub current_stage: Stage,
    /// Draft stage progress.
    pub draft: StageRecord,
    /// Review stage progress.
    pub review: StageRecord,
    /// Approval stage progress.
    pub approval: StageRecord,
    /// Publish stage progress.
    pub publish: StageRecord,
}

impl Workflow {
    /// A fresh workflow: draft active, everything else pending.
    pub fn begin(now: Timestamp) -> Self {
        Self {
            current_stage: Stage::Draft,
            draft: StageRecord::active(now),
            review: StageRecord::pending(),
            approval: StageRecord::pending(),
            publish: StageRecord::pending(),
        }
    }

    /// The record for a given stage.
    pub fn stage(&self, stage: Stage) -> &StageRecord {
        match stage {
            Stage::Draft => &self.draft,
            Stage::Review => &self.review,
            Stage::Approval => &self.approval,
            Stage::Publish => &self.publish,
        }
    }

    fn stage_mut(&mut self, stage: Stage) -> &mut StageRecord {
        match stage {
            Stage::Draft => &mut self.draft,
            Stage::Review => &mut self.review,
            Stage::Approval => &mut self.approval,
            Stage::Publish => &mut self.publish,
        }
    }

    /// Complete one stage and activate the next.
    ///
    /// The completed stage keeps its original activation timestamp; only
    /// the newly activated stage is stamped with `now`.
    pub(crate) fn advance(&mut self, completed: Stage, next: Stage, now: Timestamp) {
        self.stage_mut(completed).status = StageStatus::Completed;
        let entered = self.stage_mut(next);
        entered.status = StageStatus::Active;
        if entered.timestamp.is_none() {
            entered.timestamp = Some(now);
        }
        self.current_stage = next;
    }

    /// Reset a stage to pending, discarding its timestamp. Used when a
    /// forced resubmission pulls the document out of a later stage.
    pub(crate) fn reset(&mut self, stage: Stage) {
        *self.stage_mut(stage) = StageRecord::pending();
    }

    /// Mark a stage completed in place (used when publish closes both
    /// the approval and publish stages at the same instant).
    pub(crate) fn complete(&mut self, stage: Stage, now: Timestamp) {
        let record = self.stage_mut(stage);
        record.status = StageStatus::Completed;
        if record.timestamp.is_none() {
            record.timestamp = Some(now);
        }
    }
}

// ─── History ─────────────────────────────────────────────────────────

/// The actions recorded in a regulation's history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    /// First submission for review.
    Submitted,
    /// Resubmission after a revision request.
    Resubmitted,
    /// Reviewer approved, moving to pending publish.
    ReviewerApproved,
    /// Reviewer sent the document back for revision.
    ReviewerRejected,
    /// Admin published the document.
    Published,
    /// Admin assigned a reviewer.
    ReviewerAssigned,
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Submitted => "submitted",
            Self::Resubmitted => "resubmitted",
            Self::ReviewerApproved => "reviewer_approved",
            Self::ReviewerRejected => "reviewer_rejected",
            Self::Published => "published",
            Self::ReviewerAssigned => "reviewer_assigned",
        };
        f.write_str(s)
    }
}

/// One append-only history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// What happened.
    pub action: HistoryAction,
    /// Who triggered it.
    pub actor_id: ActorId,
    /// The actor's role at the time, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_role: Option<Role>,
    /// When it happened.
    pub timestamp: Timestamp,
    /// Free-form note (reviewer feedback, assignment details).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One published-version record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    /// The version number being superseded.
    pub version: u32,
    /// When the publication happened.
    pub updated_at: Timestamp,
    /// Release notes supplied by the admin.
    pub notes: String,
    /// Always `"published"` in the stored shape.
    pub status: String,
}

/// A named attachment reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name.
    pub name: String,
    /// Storage URL (attachment storage itself is out of scope).
    pub url: String,
}

// ─── Regulation ──────────────────────────────────────────────────────

/// The tracked regulation document.
///
/// Field names serialize in the legacy camelCase shape so stored
/// documents round-trip unchanged. Optional fields default when absent,
/// tolerating older documents that predate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    /// Store-assigned unique identifier.
    pub id: RegulationId,
    /// The actor who created the document. Immutable.
    pub created_by: ActorId,
    /// Short human-facing reference code. Immutable.
    pub ref_number: RefNumber,
    /// Creation instant. Immutable.
    pub created_at: Timestamp,

    /// Document title.
    pub title: String,
    /// Category label.
    pub category: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Author notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Internal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Ordered attachment references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Current published version. Incremented on publish.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canonical lifecycle status.
    pub status: RegulationStatus,
    /// Admin-set due date for the overall process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
    /// Deadline for resubmission, set when a reviewer denies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_deadline: Option<Timestamp>,
    /// Latest reviewer comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Admin-only notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    /// Reviewer assigned by an admin, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_reviewer: Option<ActorId>,
    /// Display name of the reviewer who last decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    /// Whether a published version is currently in force.
    #[serde(default)]
    pub is_active: bool,

    /// First submission instant. Preserved across resubmissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<Timestamp>,
    /// Latest reviewer decision instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<Timestamp>,
    /// When the approval stage closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
    /// Publication instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// Last mutation instant.
    pub updated_at: Timestamp,

    /// Per-stage workflow progress.
    pub workflow: Workflow,
    /// Append-only action log.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
    /// Published-version log.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub version_history: Vec<VersionEntry>,
}

fn default_version() -> u32 {
    1
}

impl Regulation {
    /// Create a new draft regulation.
    pub fn new(
        created_by: ActorId,
        ref_number: RefNumber,
        title: impl Into<String>,
        category: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: RegulationId::new(),
            created_by,
            ref_number,
            created_at: now,
            title: title.into(),
            category: category.into(),
            description: None,
            notes: None,
            code: None,
            attachments: Vec::new(),
            version: 1,
            status: RegulationStatus::Draft,
            deadline: None,
            revision_deadline: None,
            feedback: None,
            admin_notes: None,
            assigned_reviewer: None,
            reviewer_name: None,
            is_active: false,
            submitted_at: None,
            reviewed_at: None,
            approved_at: None,
            published_at: None,
            updated_at: now,
            workflow: Workflow::begin(now),
            history: Vec::new(),
            version_history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn make_draft() -> Regulation {
        Regulation::new(
            ActorId::new(),
            RefNumber::parse("A1234").unwrap(),
            "Data Retention Policy",
            "compliance",
            at("2026-01-01T09:00:00Z"),
        )
    }

    #[test]
    fn test_new_regulation_is_draft() {
        let reg = make_draft();
        assert_eq!(reg.status, RegulationStatus::Draft);
        assert_eq!(reg.version, 1);
        assert!(!reg.is_active);
        assert!(reg.history.is_empty());
        assert_eq!(reg.workflow.current_stage, Stage::Draft);
        assert_eq!(reg.workflow.draft.status, StageStatus::Active);
        assert_eq!(reg.workflow.review.status, StageStatus::Pending);
    }

    #[test]
    fn test_workflow_advance_stamps_next_stage_only() {
        let mut wf = Workflow::begin(at("2026-01-01T09:00:00Z"));
        wf.advance(Stage::Draft, Stage::Review, at("2026-01-02T09:00:00Z"));
        assert_eq!(wf.current_stage, Stage::Review);
        assert_eq!(wf.draft.status, StageStatus::Completed);
        assert_eq!(wf.draft.timestamp, Some(at("2026-01-01T09:00:00Z")));
        assert_eq!(wf.review.status, StageStatus::Active);
        assert_eq!(wf.review.timestamp, Some(at("2026-01-02T09:00:00Z")));
    }

    #[test]
    fn test_workflow_advance_keeps_existing_timestamp() {
        let mut wf = Workflow::begin(at("2026-01-01T09:00:00Z"));
        wf.advance(Stage::Draft, Stage::Review, at("2026-01-02T09:00:00Z"));
        // Denied and resubmitted: re-entering review keeps the first stamp.
        wf.advance(Stage::Draft, Stage::Review, at("2026-01-05T09:00:00Z"));
        assert_eq!(wf.review.timestamp, Some(at("2026-01-02T09:00:00Z")));
    }

    #[test]
    fn test_serialized_shape_uses_camel_case() {
        let reg = make_draft();
        let json = serde_json::to_value(&reg).unwrap();
        assert!(json.get("refNumber").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["workflow"]["currentStage"], "draft");
        // Unset optionals are omitted from the stored shape.
        assert!(json.get("submittedAt").is_none());
        assert!(json.get("deadline").is_none());
    }

    #[test]
    fn test_deserialize_tolerates_missing_optionals() {
        let json = serde_json::json!({
            "id": RegulationId::new(),
            "createdBy": ActorId::new(),
            "refNumber": "B2000",
            "createdAt": at("2026-01-01T00:00:00Z"),
            "title": "Old doc",
            "category": "legacy",
            "status": "pending_review",
            "updatedAt": at("2026-01-02T00:00:00Z"),
            "workflow": Workflow::begin(at("2026-01-01T00:00:00Z")),
        });
        let reg: Regulation = serde_json::from_value(json).unwrap();
        assert_eq!(reg.status, RegulationStatus::PendingReview);
        assert_eq!(reg.version, 1);
        assert!(reg.attachments.is_empty());
        assert!(reg.deadline.is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let reg = make_draft();
        let json = serde_json::to_string(&reg).unwrap();
        let parsed: Regulation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reg);
    }

    #[test]
    fn test_history_action_display() {
        assert_eq!(HistoryAction::Submitted.to_string(), "submitted");
        assert_eq!(HistoryAction::ReviewerApproved.to_string(), "reviewer_approved");
        assert_eq!(HistoryAction::ReviewerRejected.to_string(), "reviewer_rejected");
        assert_eq!(HistoryAction::ReviewerAssigned.to_string(), "reviewer_assigned");
    }
}
