//! # regflow-monitor — Deadline and SLA Monitoring
//!
//! The read/derive side of the tracker:
//!
//! - **Scan engine** (`scan.rs`): classifies every non-published
//!   regulation against "now" into overdue / due-soon / not-yet, and
//!   persists reminder records in one atomic batch.
//!
//! - **Query helpers** (`queries.rs`): read-only overdue and
//!   upcoming-deadline listings with computed day counts.
//!
//! - **SLA calculator** (`sla.rs`): per-stage elapsed wall-clock
//!   durations derived from stage-entry timestamps, tolerant of
//!   missing stage data.
//!
//! - **Scheduler** (`scheduler.rs`): tokio interval loops driving the
//!   scan engine on two cadences with graceful shutdown.
//!
//! All deadline math uses ceiling day semantics from
//! `regflow_core::temporal`.

pub mod queries;
pub mod scan;
pub mod scheduler;
pub mod sla;

pub use queries::{overdue_regulations, upcoming_deadlines, OverdueRegulation, UpcomingDeadline};
pub use scan::{classify_deadline, DeadlineClass, DeadlineScanner, ScanReport};
pub use scheduler::ScanScheduler;
pub use sla::{calculate_sla, SlaReport, StageBreakdown, StageSpan};
