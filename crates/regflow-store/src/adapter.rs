//! # Store Adapter Traits
//!
//! The abstract interface the lifecycle handlers and the deadline scan
//! engine consume. Implementations must provide per-document atomic
//! updates and all-or-nothing reminder batches; no cross-document
//! transactions are assumed beyond that.

use thiserror::Error;

use regflow_core::RegulationId;
use regflow_state::{DeadlineReminder, Regulation};

/// Errors surfaced by a store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The referenced document does not exist.
    #[error("document not found: {0}")]
    NotFound(String),

    /// A document with this identifier already exists.
    #[error("document already exists: {0}")]
    Conflict(String),

    /// A stored document could not be decoded into the typed model.
    #[error("failed to decode document {id}: {reason}")]
    Decode {
        /// The document identifier.
        id: String,
        /// Why decoding failed.
        reason: String,
    },

    /// The underlying store operation failed (network, quota, conflict).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A raw document as it sits in the store, before typed decoding.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Store-level document identifier.
    pub id: String,
    /// The document body.
    pub body: serde_json::Value,
}

impl StoredDocument {
    /// Decode the body into the typed regulation model.
    pub fn decode(&self) -> Result<Regulation, StoreError> {
        serde_json::from_value(self.body.clone()).map_err(|e| StoreError::Decode {
            id: self.id.clone(),
            reason: e.to_string(),
        })
    }
}

/// Typed access to the regulation collection.
///
/// `update` is a whole-document write under the store's per-document
/// atomicity; last writer wins between concurrent writers (accepted
/// limitation, not a guaranteed-safe invariant).
pub trait RegulationStore: Send + Sync {
    /// Fetch one regulation by id.
    fn get(&self, id: &RegulationId) -> Result<Regulation, StoreError>;

    /// Insert a new regulation. Fails with [`StoreError::Conflict`] if
    /// the id is already present.
    fn insert(&self, regulation: &Regulation) -> Result<(), StoreError>;

    /// Replace an existing regulation. Fails with
    /// [`StoreError::NotFound`] if the document is absent.
    fn update(&self, id: &RegulationId, regulation: &Regulation) -> Result<(), StoreError>;

    /// Bulk read of every document in the collection, undecoded.
    ///
    /// The scan engine and query helpers decode per document so a single
    /// malformed record cannot abort a whole pass.
    fn documents(&self) -> Result<Vec<StoredDocument>, StoreError>;

    /// Number of documents in the collection.
    fn count(&self) -> Result<usize, StoreError>;
}

/// Append-only access to the reminder collection.
pub trait ReminderStore: Send + Sync {
    /// Append a batch of reminders atomically — all commit or none do.
    fn append_batch(&self, reminders: &[DeadlineReminder]) -> Result<(), StoreError>;

    /// All reminders currently stored.
    fn reminders(&self) -> Result<Vec<DeadlineReminder>, StoreError>;
}
