//! # Deadline Reminder Records
//!
//! Disposable records produced by the deadline scan engine when a
//! regulation's due date is approaching or missed. Never created by
//! user action; retention/cleanup is an external concern.
//!
//! A new record is written on every qualifying scan — there is no
//! cross-scan deduplication, so several reminders may exist for the
//! same document. Reminders are advisory, not a source of truth.

use serde::{Deserialize, Serialize};

use regflow_core::{ActorId, RegulationId, Timestamp};

/// Whether the reminder flags an approaching or a missed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    /// Deadline is within the reminder window but not yet passed.
    Upcoming,
    /// Deadline has passed.
    Overdue,
}

/// Urgency of an upcoming reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Due within one day (or already overdue).
    High,
    /// Due within the reminder window.
    Medium,
}

/// A deadline reminder produced by one scan pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineReminder {
    /// The regulation this reminder concerns.
    pub regulation_id: RegulationId,
    /// Title snapshot at scan time.
    pub regulation_title: String,
    /// The deadline that triggered the reminder.
    pub deadline: Timestamp,
    /// Days until the deadline (upcoming) — ceiling semantics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_deadline: Option<i64>,
    /// Days past the deadline (overdue).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<i64>,
    /// Status display string at scan time.
    pub status: String,
    /// The regulation's author, for notification routing.
    pub created_by: ActorId,
    /// Upcoming or overdue. Stored under the legacy `type` field name.
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    /// Urgency.
    pub priority: Priority,
    /// When the scan produced this record.
    pub created_at: Timestamp,
    /// Whether a notification has been sent for this record.
    pub notified: bool,
    /// When the notification went out, if it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip_and_shape() {
        let reminder = DeadlineReminder {
            regulation_id: RegulationId::new(),
            regulation_title: "Safety Code".to_string(),
            deadline: Timestamp::parse("2026-02-01T00:00:00Z").unwrap(),
            days_until_deadline: Some(2),
            days_overdue: None,
            status: "Pending Review".to_string(),
            created_by: ActorId::new(),
            kind: ReminderKind::Upcoming,
            priority: Priority::Medium,
            created_at: Timestamp::parse("2026-01-30T00:00:00Z").unwrap(),
            notified: false,
            notified_at: None,
        };
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["type"], "upcoming");
        assert!(json.get("kind").is_none());
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["daysUntilDeadline"], 2);
        assert!(json.get("daysOverdue").is_none());

        let parsed: DeadlineReminder = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, reminder);
    }
}
