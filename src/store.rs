//! Thin persistence layer for generation records.
//!
//! Exposes keyed create/read/update/delete access to half-hourly generation
//! records, mirroring the document store the acquisition service writes to.
//! The statistics engine never talks to a store directly; an ingestion step
//! materializes `list()` output into a dataset via [`crate::dataset`].

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{GridStatError, Result};
use crate::models::GenerationRecord;

/// Keyed document store for generation records
#[allow(async_fn_in_trait)]
pub trait GenerationStore {
    /// Insert a new record; fails if the id already exists
    async fn create(&self, record: GenerationRecord) -> Result<()>;

    /// Fetch a record by id
    async fn read(&self, id: &str) -> Result<GenerationRecord>;

    /// Replace an existing record; fails if the id is unknown
    async fn update(&self, record: GenerationRecord) -> Result<()>;

    /// Remove a record by id
    async fn delete(&self, id: &str) -> Result<()>;

    /// All stored records, ordered by timestamp
    async fn list(&self) -> Result<Vec<GenerationRecord>>;

    /// The record with the smallest id, if any
    ///
    /// The acquisition service uses this to decide which settlement date to
    /// backfill next.
    async fn earliest(&self) -> Result<Option<GenerationRecord>>;
}

/// In-memory record store backed by a hash map
///
/// Used as the local backend and by tests. Concurrent access is mediated by
/// a read-write lock; every call returns owned copies of the stored records.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, GenerationRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records, keyed by their id
    pub async fn with_records(records: Vec<GenerationRecord>) -> Result<Self> {
        let store = Self::new();
        for record in records {
            store.create(record).await?;
        }
        Ok(store)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl GenerationStore for InMemoryStore {
    async fn create(&self, record: GenerationRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(GridStatError::DuplicateRecord {
                id: record.id.clone(),
            });
        }
        debug!(id = %record.id, "Stored generation record");
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn read(&self, id: &str) -> Result<GenerationRecord> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| GridStatError::RecordNotFound { id: id.to_string() })
    }

    async fn update(&self, record: GenerationRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(GridStatError::RecordNotFound {
                id: record.id.clone(),
            });
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GridStatError::RecordNotFound { id: id.to_string() })
    }

    async fn list(&self) -> Result<Vec<GenerationRecord>> {
        let records = self.records.read().await;
        let mut all: Vec<GenerationRecord> = records.values().cloned().collect();
        all.sort_by_key(|record| record.timestamp);
        Ok(all)
    }

    async fn earliest(&self) -> Result<Option<GenerationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .min_by(|a, b| a.id.cmp(&b.id))
            .cloned())
    }
}
