//! # regflow-cli — Regulation Tracker Command-Line Interface
//!
//! Operates on a JSON snapshot file: an array of regulation documents
//! in the stored camelCase shape. Lifecycle commands load the snapshot,
//! apply one transition, and write the file back; reporting commands
//! are read-only.
//!
//! ## Subcommands
//!
//! - `submit` / `review` / `publish` / `assign` — lifecycle transitions
//! - `scan` — one deadline scan pass, printing the reminder batch
//! - `overdue` / `upcoming` — deadline listings
//! - `sla` — per-stage elapsed-time breakdown for one regulation
//! - `watch` — run the scan scheduler until interrupted
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handler functions delegate to the domain crates; the only logic
//!   here is file I/O and output formatting.

pub mod lifecycle;
pub mod monitor;
pub mod snapshot;
pub mod watch;
