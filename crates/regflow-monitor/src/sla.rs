//! # SLA Calculator
//!
//! Derives per-stage elapsed wall-clock durations from a regulation's
//! stage-entry timestamps. A stage that has been entered but not yet
//! left is measured up to "now"; a stage never entered is simply absent
//! from the breakdown rather than reported as zero.
//!
//! Stage boundaries:
//!
//! - draft:    `created_at` → `submitted_at` (or now)
//! - review:   `submitted_at` → `reviewed_at` (or now)
//! - approval: `reviewed_at` → `approved_at` (or now), unless the
//!   document is back in revision
//! - publish:  `approved_at` → `published_at` (or now)
//!
//! Durations use ceiling day semantics; each stage rounds up
//! independently, and the total rounds the summed seconds once, so the
//! total can be smaller than the sum of the per-stage day counts.

use regflow_core::temporal::ceil_days;
use regflow_core::{RegulationId, RegulationStatus, Timestamp};
use regflow_state::Regulation;
use regflow_store::{RegulationStore, StoreError};
use serde::Serialize;

/// Elapsed time in one workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSpan {
    /// Whole days spent in the stage (ceiling semantics, at least 0).
    pub duration_days: i64,
    /// When the stage was entered.
    pub start: Timestamp,
    /// When the stage was left, or `None` if still in it.
    pub end: Option<Timestamp>,
}

/// Per-stage elapsed durations. A `None` stage was never entered.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StageBreakdown {
    pub draft: Option<StageSpan>,
    pub review: Option<StageSpan>,
    pub approval: Option<StageSpan>,
    pub publish: Option<StageSpan>,
}

/// The SLA report for one regulation.
#[derive(Debug, Serialize)]
pub struct SlaReport {
    pub regulation_id: RegulationId,
    pub current_status: RegulationStatus,
    pub stages: StageBreakdown,
    /// Total elapsed days across all entered stages.
    pub total_time_days: i64,
    /// Whether the overall deadline has passed without publication.
    pub is_overdue: bool,
    /// Days until (or, if negative, since) the deadline, when one is set.
    pub days_until_deadline: Option<i64>,
}

/// Compute the SLA report for a regulation at the given instant.
pub fn calculate_sla(
    store: &dyn RegulationStore,
    id: &RegulationId,
    now: Timestamp,
) -> Result<SlaReport, StoreError> {
    let regulation = store.get(id)?;
    Ok(sla_for(&regulation, now))
}

fn sla_for(regulation: &Regulation, now: Timestamp) -> SlaReport {
    let mut stages = StageBreakdown::default();
    let mut total_secs = 0i64;

    let mut add = |start: Timestamp, end: Option<Timestamp>| {
        let until = end.unwrap_or(now);
        // Clamp: legacy documents can carry out-of-order timestamps.
        let secs = start.seconds_until(until).max(0);
        total_secs += secs;
        StageSpan {
            duration_days: ceil_days(secs),
            start,
            end,
        }
    };

    stages.draft = Some(add(regulation.created_at, regulation.submitted_at));

    if let Some(submitted) = regulation.submitted_at {
        stages.review = Some(add(submitted, regulation.reviewed_at));
    }

    if let Some(reviewed) = regulation.reviewed_at {
        // A denial rewinds the document to revision: the prior review
        // decision no longer opens an approval stage.
        if regulation.status != RegulationStatus::NeedsRevision {
            stages.approval = Some(add(reviewed, regulation.approved_at));
        }
    }

    if let Some(approved) = regulation.approved_at {
        stages.publish = Some(add(approved, regulation.published_at));
    }

    let is_overdue = regulation
        .deadline
        .is_some_and(|d| now.seconds_until(d) < 0 && !regulation.status.is_terminal());

    SlaReport {
        regulation_id: regulation.id,
        current_status: regulation.status,
        stages,
        total_time_days: ceil_days(total_secs),
        is_overdue,
        days_until_deadline: regulation.deadline.map(|d| now.days_until(d)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regflow_core::{ActorId, RefNumber, Role};
    use regflow_store::MemoryStore;

    fn at(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn draft(created: Timestamp) -> Regulation {
        Regulation::new(
            ActorId::new(),
            RefNumber::parse("C3200").unwrap(),
            "Waste Disposal Rules",
            "environment",
            created,
        )
    }

    #[test]
    fn test_full_lifecycle_breakdown() {
        // Created Jan 1, submitted Jan 2, approved Jan 4, published Jan 5.
        let mut reg = draft(at("2026-01-01T00:00:00Z"));
        let author = reg.created_by;
        reg.submit(&author, None, at("2026-01-02T00:00:00Z")).unwrap();
        reg.approve(&ActorId::new(), Role::Reviewer, None, "ok", at("2026-01-04T00:00:00Z"))
            .unwrap();
        reg.publish(&ActorId::new(), Role::Admin, None, at("2026-01-05T00:00:00Z"))
            .unwrap();

        let store = MemoryStore::new();
        store.insert(&reg).unwrap();
        let report = calculate_sla(&store, &reg.id, at("2026-02-01T00:00:00Z")).unwrap();

        assert_eq!(report.stages.draft.unwrap().duration_days, 1);
        assert_eq!(report.stages.review.unwrap().duration_days, 2);
        assert_eq!(report.stages.approval.unwrap().duration_days, 1);
        assert_eq!(report.stages.publish.unwrap().duration_days, 0);
        assert_eq!(report.total_time_days, 4);
        assert!(!report.is_overdue);
    }

    #[test]
    fn test_unsubmitted_draft_has_only_draft_stage() {
        let reg = draft(at("2026-01-01T00:00:00Z"));
        let store = MemoryStore::new();
        store.insert(&reg).unwrap();

        let report = calculate_sla(&store, &reg.id, at("2026-01-03T12:00:00Z")).unwrap();
        let draft_span = report.stages.draft.unwrap();
        assert_eq!(draft_span.duration_days, 3);
        assert!(draft_span.end.is_none());
        assert!(report.stages.review.is_none());
        assert!(report.stages.approval.is_none());
        assert!(report.stages.publish.is_none());
        assert_eq!(report.total_time_days, 3);
    }

    #[test]
    fn test_denied_document_has_no_approval_stage() {
        let mut reg = draft(at("2026-01-01T00:00:00Z"));
        let author = reg.created_by;
        reg.submit(&author, None, at("2026-01-02T00:00:00Z")).unwrap();
        reg.deny(
            &ActorId::new(),
            Role::Reviewer,
            "needs work",
            at("2026-01-10T00:00:00Z"),
            at("2026-01-04T00:00:00Z"),
        )
        .unwrap();

        let store = MemoryStore::new();
        store.insert(&reg).unwrap();
        let report = calculate_sla(&store, &reg.id, at("2026-01-05T00:00:00Z")).unwrap();

        assert!(report.stages.review.is_some());
        assert!(report.stages.approval.is_none());
        assert_eq!(report.current_status, RegulationStatus::NeedsRevision);
    }

    #[test]
    fn test_open_review_stage_measured_to_now() {
        let mut reg = draft(at("2026-01-01T00:00:00Z"));
        let author = reg.created_by;
        reg.submit(&author, None, at("2026-01-02T00:00:00Z")).unwrap();

        let store = MemoryStore::new();
        store.insert(&reg).unwrap();
        let report = calculate_sla(&store, &reg.id, at("2026-01-06T12:00:00Z")).unwrap();

        let review = report.stages.review.unwrap();
        assert!(review.end.is_none());
        assert_eq!(review.duration_days, 5);
    }

    #[test]
    fn test_overdue_flag_and_deadline_days() {
        let mut reg = draft(at("2026-01-01T00:00:00Z"));
        reg.deadline = Some(at("2026-01-10T00:00:00Z"));
        let store = MemoryStore::new();
        store.insert(&reg).unwrap();

        let report = calculate_sla(&store, &reg.id, at("2026-01-12T00:00:00Z")).unwrap();
        assert!(report.is_overdue);
        assert_eq!(report.days_until_deadline, Some(-2));
    }

    #[test]
    fn test_published_document_is_never_overdue() {
        let mut reg = draft(at("2026-01-01T00:00:00Z"));
        reg.deadline = Some(at("2026-01-03T00:00:00Z"));
        let author = reg.created_by;
        reg.submit(&author, None, at("2026-01-02T00:00:00Z")).unwrap();
        reg.approve(&ActorId::new(), Role::Reviewer, None, "ok", at("2026-01-04T00:00:00Z"))
            .unwrap();
        reg.publish(&ActorId::new(), Role::Admin, None, at("2026-01-05T00:00:00Z"))
            .unwrap();

        let store = MemoryStore::new();
        store.insert(&reg).unwrap();
        let report = calculate_sla(&store, &reg.id, at("2026-01-12T00:00:00Z")).unwrap();
        assert!(!report.is_overdue);
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let store = MemoryStore::new();
        let result = calculate_sla(&store, &RegulationId::new(), at("2026-01-01T00:00:00Z"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_out_of_order_timestamps_clamp_to_zero() {
        // Legacy data sometimes carries a submission before creation.
        let mut reg = draft(at("2026-01-05T00:00:00Z"));
        reg.submitted_at = Some(at("2026-01-03T00:00:00Z"));
        let store = MemoryStore::new();
        store.insert(&reg).unwrap();

        let report = calculate_sla(&store, &reg.id, at("2026-01-06T00:00:00Z")).unwrap();
        assert_eq!(report.stages.draft.unwrap().duration_days, 0);
    }
}
