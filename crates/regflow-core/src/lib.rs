//! # regflow-core — Foundational Types for the Regulation Tracker
//!
//! This crate is the bedrock of the regflow workspace. It defines the
//! type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `RegulationId`, `ActorId`,
//!    `RefNumber` — all newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **Single `RegulationStatus` enum.** One definition, five variants,
//!    exhaustive `match` everywhere. Raw status strings cross into the
//!    type system exactly once, at the normalization boundary in
//!    `status.rs` — no other module compares strings.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, with ceiling day arithmetic for
//!    deadline and SLA computation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regflow-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod role;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::RegflowError;
pub use identity::{ActorId, RefNumber, RegulationId};
pub use role::Role;
pub use status::{RegulationStatus, StatusBucket};
pub use temporal::Timestamp;
