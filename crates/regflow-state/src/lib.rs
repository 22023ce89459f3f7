//! # regflow-state — Regulation Document Model and Lifecycle
//!
//! Implements the regulation approval state machine as validated
//! transitions on the document itself. Invalid transitions are rejected
//! at runtime with structured errors naming the current status and the
//! attempted target.
//!
//! ## State Machine
//!
//! ```text
//! Draft ──▶ Pending Review ──▶ Pending Publish ──▶ Published (terminal)
//!                │ ▲                  ▲
//!                ▼ │                  │
//!           Needs Revision ───────────┘ (via approve)
//!            (resubmission returns to Pending Review)
//! ```
//!
//! ## Design Decision
//!
//! The lifecycle uses an enum with validated transitions rather than
//! typestate types. The documents live in an external store and are
//! deserialized in arbitrary states, so the state cannot be carried in
//! the Rust type system across the persistence boundary; a `transition()`
//! returning `Result` gives the same invariant at the only place it can
//! be enforced.
//!
//! Pure domain logic — no I/O. Persistence and authorization live in
//! `regflow-store` and `regflow-service`.

pub mod lifecycle;
pub mod regulation;
pub mod reminder;

// ─── Regulation re-exports ──────────────────────────────────────────

pub use regulation::{
    Attachment, HistoryAction, HistoryEntry, Regulation, Stage, StageRecord, StageStatus,
    VersionEntry, Workflow,
};

// ─── Lifecycle re-exports ───────────────────────────────────────────

pub use lifecycle::LifecycleError;

// ─── Reminder re-exports ────────────────────────────────────────────

pub use reminder::{DeadlineReminder, Priority, ReminderKind};
