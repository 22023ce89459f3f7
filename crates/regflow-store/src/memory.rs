//! # In-Memory Store
//!
//! Reference implementation of the store adapter backed by an
//! `RwLock`-protected map of raw JSON documents. Used by the test
//! suites and the CLI driver; keyed by the regulation's UUID string,
//! matching how a document store would key the collection.

use std::collections::BTreeMap;
use std::sync::RwLock;

use regflow_core::RegulationId;
use regflow_state::{DeadlineReminder, Regulation};

use crate::adapter::{RegulationStore, ReminderStore, StoreError, StoredDocument};

#[derive(Debug, Default)]
struct Inner {
    regulations: BTreeMap<String, serde_json::Value>,
    reminders: Vec<DeadlineReminder>,
}

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON snapshot: an array of regulation
    /// documents, keyed by their `id` field.
    ///
    /// Documents without a string `id` are rejected; otherwise the body
    /// is stored as-is, malformed or not — decoding happens read-side.
    pub fn from_snapshot(documents: Vec<serde_json::Value>) -> Result<Self, StoreError> {
        let store = Self::new();
        for doc in documents {
            let id = doc
                .get("id")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| StoreError::Backend("snapshot document missing id".to_string()))?;
            store.insert_raw(id, doc)?;
        }
        Ok(store)
    }

    /// Insert a raw document body under an explicit key.
    ///
    /// Bypasses typed validation; exists so tests and snapshot loading
    /// can seed legacy documents the typed model would reject.
    pub fn insert_raw(&self, id: String, body: serde_json::Value) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        if inner.regulations.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        inner.regulations.insert(id, body);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }

    fn key(id: &RegulationId) -> String {
        id.as_uuid().to_string()
    }

    fn encode(regulation: &Regulation) -> Result<serde_json::Value, StoreError> {
        serde_json::to_value(regulation)
            .map_err(|e| StoreError::Backend(format!("failed to encode document: {e}")))
    }
}

impl RegulationStore for MemoryStore {
    fn get(&self, id: &RegulationId) -> Result<Regulation, StoreError> {
        let key = Self::key(id);
        let inner = self.read()?;
        let body = inner
            .regulations
            .get(&key)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        StoredDocument {
            id: key,
            body: body.clone(),
        }
        .decode()
    }

    fn insert(&self, regulation: &Regulation) -> Result<(), StoreError> {
        let body = Self::encode(regulation)?;
        self.insert_raw(Self::key(&regulation.id), body)
    }

    fn update(&self, id: &RegulationId, regulation: &Regulation) -> Result<(), StoreError> {
        let body = Self::encode(regulation)?;
        let key = Self::key(id);
        let mut inner = self.write()?;
        match inner.regulations.get_mut(&key) {
            Some(slot) => {
                *slot = body;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    fn documents(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .regulations
            .iter()
            .map(|(id, body)| StoredDocument {
                id: id.clone(),
                body: body.clone(),
            })
            .collect())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.regulations.len())
    }
}

impl ReminderStore for MemoryStore {
    fn append_batch(&self, reminders: &[DeadlineReminder]) -> Result<(), StoreError> {
        // Single write lock: the whole batch lands or none of it does.
        let mut inner = self.write()?;
        inner.reminders.extend_from_slice(reminders);
        Ok(())
    }

    fn reminders(&self) -> Result<Vec<DeadlineReminder>, StoreError> {
        Ok(self.read()?.reminders.clone())
    }
}
