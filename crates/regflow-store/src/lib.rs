//! # regflow-store — Document Store Adapter
//!
//! Defines the store contract the rest of the workspace programs
//! against, and an in-memory reference implementation.
//!
//! The production document store (Firestore or similar) is an external
//! collaborator: this crate only pins down the semantics the tracker
//! relies on — get-by-id, whole-document update with per-document
//! atomicity, bulk raw reads for the scan engine, and an atomic batch
//! append for reminder records. Real network bindings are out of scope.
//!
//! Documents cross the adapter as raw JSON and are decoded per document,
//! so one malformed legacy record degrades that record only — bulk
//! consumers decide whether to skip or fail.

pub mod adapter;
pub mod memory;

pub use adapter::{RegulationStore, ReminderStore, StoreError, StoredDocument};
pub use memory::MemoryStore;
