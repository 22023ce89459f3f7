//! # Deadline Query Helpers
//!
//! Read-only listings over the regulation collection: documents past
//! their deadline, and documents with a deadline inside a caller-chosen
//! horizon. Neither query writes reminders; that is the scan engine's
//! job.

use regflow_core::temporal::SECS_PER_DAY;
use regflow_core::Timestamp;
use regflow_state::Regulation;
use regflow_store::{RegulationStore, StoreError};
use serde::Serialize;

/// A regulation past its deadline, with the computed day count.
#[derive(Debug, Serialize)]
pub struct OverdueRegulation {
    pub regulation: Regulation,
    /// Whole days past the deadline (ceiling semantics, at least 0).
    pub days_overdue: i64,
}

/// A regulation whose deadline falls within the query horizon.
#[derive(Debug, Serialize)]
pub struct UpcomingDeadline {
    pub regulation: Regulation,
    /// Whole days until the deadline (ceiling semantics).
    pub days_until_deadline: i64,
}

/// List non-published regulations whose deadline is strictly in the past.
///
/// Documents that fail to decode are skipped, matching the scan engine's
/// tolerance for legacy data.
pub fn overdue_regulations(
    store: &dyn RegulationStore,
    now: Timestamp,
) -> Result<Vec<OverdueRegulation>, StoreError> {
    let mut out = Vec::new();
    for doc in store.documents()? {
        let Ok(regulation) = doc.decode() else {
            continue;
        };
        if regulation.status.is_terminal() {
            continue;
        }
        let Some(deadline) = regulation.deadline else {
            continue;
        };
        if now.seconds_until(deadline) < 0 {
            let days_overdue = -now.days_until(deadline);
            out.push(OverdueRegulation {
                regulation,
                days_overdue,
            });
        }
    }
    out.sort_by_key(|o| o.regulation.deadline);
    Ok(out)
}

/// List non-published regulations whose deadline falls within the next
/// `horizon_days` days (inclusive, deadline not yet passed), sorted by
/// nearest deadline first.
pub fn upcoming_deadlines(
    store: &dyn RegulationStore,
    now: Timestamp,
    horizon_days: i64,
) -> Result<Vec<UpcomingDeadline>, StoreError> {
    let horizon_secs = horizon_days * SECS_PER_DAY;
    let mut out = Vec::new();
    for doc in store.documents()? {
        let Ok(regulation) = doc.decode() else {
            continue;
        };
        if regulation.status.is_terminal() {
            continue;
        }
        let Some(deadline) = regulation.deadline else {
            continue;
        };
        let secs = now.seconds_until(deadline);
        if (0..=horizon_secs).contains(&secs) {
            let days_until_deadline = now.days_until(deadline);
            out.push(UpcomingDeadline {
                regulation,
                days_until_deadline,
            });
        }
    }
    out.sort_by_key(|u| u.regulation.deadline);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regflow_core::{ActorId, RefNumber, Role};
    use regflow_store::MemoryStore;

    fn at(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn now() -> Timestamp {
        at("2026-03-01T00:00:00Z")
    }

    fn seed(store: &MemoryStore, title: &str, deadline: Option<Timestamp>) -> Regulation {
        let mut reg = Regulation::new(
            ActorId::new(),
            RefNumber::parse("B2100").unwrap(),
            title,
            "general",
            at("2026-01-01T00:00:00Z"),
        );
        reg.deadline = deadline;
        store.insert(&reg).unwrap();
        reg
    }

    #[test]
    fn test_overdue_lists_only_past_deadlines() {
        let store = MemoryStore::new();
        seed(&store, "Two days over", Some(at("2026-02-27T00:00:00Z")));
        seed(&store, "Due tomorrow", Some(at("2026-03-02T00:00:00Z")));
        seed(&store, "No deadline", None);

        let overdue = overdue_regulations(&store, now()).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].regulation.title, "Two days over");
        assert_eq!(overdue[0].days_overdue, 2);
    }

    #[test]
    fn test_overdue_deadline_exactly_now_is_not_overdue() {
        let store = MemoryStore::new();
        seed(&store, "On the line", Some(now()));
        assert!(overdue_regulations(&store, now()).unwrap().is_empty());
    }

    #[test]
    fn test_overdue_one_hour_past_is_zero_days() {
        let store = MemoryStore::new();
        seed(&store, "Just missed", Some(at("2026-02-28T23:00:00Z")));
        let overdue = overdue_regulations(&store, now()).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].days_overdue, 0);
    }

    #[test]
    fn test_overdue_excludes_published() {
        let store = MemoryStore::new();
        let mut reg = seed(&store, "Done", Some(at("2026-02-01T00:00:00Z")));
        let author = reg.created_by;
        reg.submit(&author, None, at("2026-01-02T00:00:00Z")).unwrap();
        reg.approve(&ActorId::new(), Role::Reviewer, None, "ok", at("2026-01-03T00:00:00Z"))
            .unwrap();
        reg.publish(&ActorId::new(), Role::Admin, None, at("2026-01-04T00:00:00Z"))
            .unwrap();
        store.update(&reg.id, &reg).unwrap();

        assert!(overdue_regulations(&store, now()).unwrap().is_empty());
    }

    #[test]
    fn test_upcoming_sorted_by_nearest_deadline() {
        let store = MemoryStore::new();
        seed(&store, "Day five", Some(at("2026-03-06T00:00:00Z")));
        seed(&store, "Day two", Some(at("2026-03-03T00:00:00Z")));
        seed(&store, "Far out", Some(at("2026-04-01T00:00:00Z")));
        seed(&store, "Already past", Some(at("2026-02-20T00:00:00Z")));

        let upcoming = upcoming_deadlines(&store, now(), 7).unwrap();
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].regulation.title, "Day two");
        assert_eq!(upcoming[0].days_until_deadline, 2);
        assert_eq!(upcoming[1].regulation.title, "Day five");
        assert_eq!(upcoming[1].days_until_deadline, 5);
    }

    #[test]
    fn test_upcoming_horizon_is_inclusive() {
        let store = MemoryStore::new();
        seed(&store, "At the horizon", Some(at("2026-03-08T00:00:00Z")));
        seed(&store, "Past the horizon", Some(at("2026-03-08T00:00:01Z")));

        let upcoming = upcoming_deadlines(&store, now(), 7).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].regulation.title, "At the horizon");
    }

    #[test]
    fn test_queries_skip_undecodable_documents() {
        let store = MemoryStore::new();
        seed(&store, "Healthy", Some(at("2026-02-27T00:00:00Z")));
        store
            .insert_raw(
                "legacy".to_string(),
                serde_json::json!({ "title": 42 }),
            )
            .unwrap();

        assert_eq!(overdue_regulations(&store, now()).unwrap().len(), 1);
        assert!(upcoming_deadlines(&store, now(), 7).unwrap().len() <= 1);
    }
}
