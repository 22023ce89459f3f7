//! # Deadline Scan Engine
//!
//! One scan pass reads every non-published regulation, classifies its
//! deadline against "now", and persists one reminder record per
//! qualifying document in a single atomic batch.
//!
//! Scans are permissive about data quality: a document that fails to
//! decode is skipped and counted, never fatal. Scans are also not
//! mutually exclusive — two concurrent ticks may both observe the same
//! overdue document and each write a reminder. Reminders are disposable
//! records, so repeated writes are tolerated rather than locked out.

use std::sync::Arc;

use regflow_core::temporal::SECS_PER_DAY;
use regflow_core::Timestamp;
use regflow_state::{DeadlineReminder, Priority, Regulation, ReminderKind};
use regflow_store::{RegulationStore, ReminderStore, StoreError};

/// Days ahead covered by the reminder window.
pub const REMINDER_WINDOW_DAYS: i64 = 3;

/// Days ahead that escalate an upcoming reminder to high priority.
pub const HIGH_PRIORITY_WINDOW_DAYS: i64 = 1;

/// How one deadline relates to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineClass {
    /// Deadline has passed.
    Overdue {
        /// Whole days past the deadline (ceiling semantics).
        days_overdue: i64,
    },
    /// Deadline falls within the reminder window.
    DueSoon {
        /// Whole days until the deadline (ceiling semantics).
        days_until: i64,
        /// High within one day, medium within the window.
        priority: Priority,
    },
    /// Deadline is beyond the reminder window; not reported by a scan.
    Distant,
}

/// Classify a deadline against "now". Pure; the single source of the
/// window and priority thresholds.
pub fn classify_deadline(deadline: Timestamp, now: Timestamp) -> DeadlineClass {
    let secs = now.seconds_until(deadline);
    if secs < 0 {
        DeadlineClass::Overdue {
            days_overdue: -now.days_until(deadline),
        }
    } else if secs <= REMINDER_WINDOW_DAYS * SECS_PER_DAY {
        let priority = if secs <= HIGH_PRIORITY_WINDOW_DAYS * SECS_PER_DAY {
            Priority::High
        } else {
            Priority::Medium
        };
        DeadlineClass::DueSoon {
            days_until: now.days_until(deadline),
            priority,
        }
    } else {
        DeadlineClass::Distant
    }
}

/// Result of one scan pass.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Reminders for deadlines inside the window.
    pub upcoming: Vec<DeadlineReminder>,
    /// Reminders for missed deadlines.
    pub overdue: Vec<DeadlineReminder>,
    /// Documents skipped because they could not be decoded.
    pub skipped: usize,
}

impl ScanReport {
    /// Total reminders produced by the pass.
    pub fn total(&self) -> usize {
        self.upcoming.len() + self.overdue.len()
    }
}

/// The deadline scan engine.
pub struct DeadlineScanner {
    regulations: Arc<dyn RegulationStore>,
    reminders: Arc<dyn ReminderStore>,
}

impl DeadlineScanner {
    /// Build a scanner over the two collections it touches.
    pub fn new(regulations: Arc<dyn RegulationStore>, reminders: Arc<dyn ReminderStore>) -> Self {
        Self {
            regulations,
            reminders,
        }
    }

    /// Run one scan pass at the given instant.
    ///
    /// Produces one reminder per qualifying regulation and commits them
    /// all in a single atomic batch; skips the write entirely when
    /// nothing qualifies. Safe to call repeatedly — reminders are not
    /// deduplicated across scans.
    pub fn scan(&self, now: Timestamp) -> Result<ScanReport, StoreError> {
        let mut report = ScanReport::default();

        for doc in self.regulations.documents()? {
            let regulation = match doc.decode() {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(document = %doc.id, error = %e, "skipping malformed document");
                    report.skipped += 1;
                    continue;
                }
            };
            if regulation.status.is_terminal() {
                continue;
            }
            let Some(deadline) = regulation.deadline else {
                continue;
            };

            match classify_deadline(deadline, now) {
                DeadlineClass::Overdue { days_overdue } => {
                    report
                        .overdue
                        .push(build_reminder(&regulation, deadline, now, |r| {
                            r.kind = ReminderKind::Overdue;
                            r.priority = Priority::High;
                            r.days_overdue = Some(days_overdue);
                        }));
                }
                DeadlineClass::DueSoon {
                    days_until,
                    priority,
                } => {
                    report
                        .upcoming
                        .push(build_reminder(&regulation, deadline, now, |r| {
                            r.kind = ReminderKind::Upcoming;
                            r.priority = priority;
                            r.days_until_deadline = Some(days_until);
                        }));
                }
                DeadlineClass::Distant => {}
            }
        }

        if report.total() > 0 {
            let batch: Vec<DeadlineReminder> = report
                .upcoming
                .iter()
                .chain(report.overdue.iter())
                .cloned()
                .collect();
            self.reminders.append_batch(&batch)?;
        }

        tracing::info!(
            upcoming = report.upcoming.len(),
            overdue = report.overdue.len(),
            skipped = report.skipped,
            "deadline scan completed"
        );
        Ok(report)
    }
}

fn build_reminder(
    regulation: &Regulation,
    deadline: Timestamp,
    now: Timestamp,
    fill: impl FnOnce(&mut DeadlineReminder),
) -> DeadlineReminder {
    let mut reminder = DeadlineReminder {
        regulation_id: regulation.id,
        regulation_title: regulation.title.clone(),
        deadline,
        days_until_deadline: None,
        days_overdue: None,
        status: regulation.status.to_string(),
        created_by: regulation.created_by,
        kind: ReminderKind::Upcoming,
        priority: Priority::Medium,
        created_at: now,
        notified: false,
        notified_at: None,
    };
    fill(&mut reminder);
    reminder
}
