use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::RecordId;
use crate::model::{Collection, Entry, Fields, Record, Stamped};

use super::{Storage, StorageResult};

/// Source of the current time for record timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Local record store, the system of record for every collection.
///
/// Each collection is persisted whole under its key on every write. Reads that fail
/// to parse are treated as an empty collection and writes that fail are logged and
/// reported as `false`; neither ever reaches the caller as an error.
pub struct RecordStore<S> {
    storage: S,
    clock: Clock,
}

impl<S: fmt::Debug> fmt::Debug for RecordStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl<S: Storage> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, Utc::now)
    }

    /// Store that stamps records with times from `clock`
    pub fn with_clock<F>(storage: S, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            storage,
            clock: Arc::new(clock),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All records of a collection in insertion order.
    /// Missing or unreadable data is returned as an empty collection.
    #[tracing::instrument(name = "List records", skip(self), fields(key = C::KEY))]
    pub fn list<C: Collection>(&self) -> Vec<Record<C::Fields>> {
        match self.try_list::<C>() {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Failed to read local collection {}: {}", C::KEY, e);
                Vec::new()
            }
        }
    }

    /// A single record by id
    pub fn get<C: Collection>(&self, id: &RecordId) -> Option<Record<C::Fields>> {
        self.list::<C>().into_iter().find(|record| record.id() == id)
    }

    /// Append a new record with a fresh id and timestamps
    #[tracing::instrument(name = "Create record", skip(self, fields), fields(key = C::KEY))]
    pub fn create<C: Collection>(&mut self, fields: C::Fields) -> Record<C::Fields> {
        let now = (self.clock)();
        let record = Entry::new(RecordId::generate(now), Stamped::created(fields, now));

        let mut records = self.list::<C>();
        records.push(record.clone());
        self.save::<C>(&records);

        record
    }

    /// Merge `patch` into the record with the given id, in place.
    /// Returns `None` without writing anything if no record has that id.
    #[tracing::instrument(name = "Update record", skip(self, patch), fields(key = C::KEY))]
    pub fn update<C: Collection>(
        &mut self,
        id: &RecordId,
        patch: C::Fields,
    ) -> Option<Record<C::Fields>> {
        let mut records = self.list::<C>();
        let index = records.iter().position(|record| record.id() == id)?;

        let record = &mut records[index];
        record.fields.data.merge(patch);
        record.fields.updated_at = Some((self.clock)());
        let updated = record.clone();

        self.save::<C>(&records);
        Some(updated)
    }

    /// Remove the record with the given id.
    /// Returns whether a record was removed.
    #[tracing::instrument(name = "Delete record", skip(self), fields(key = C::KEY))]
    pub fn delete<C: Collection>(&mut self, id: &RecordId) -> bool {
        let records = self.list::<C>();
        let before = records.len();

        let remaining: Vec<_> = records
            .into_iter()
            .filter(|record| record.id() != id)
            .collect();
        let removed = remaining.len() < before;

        self.save::<C>(&remaining);
        removed
    }

    /// Replace a whole collection. Returns `false` if the write failed.
    #[tracing::instrument(name = "Save collection", skip(self, records), fields(key = C::KEY, count = records.len()))]
    pub fn save<C: Collection>(&mut self, records: &[Record<C::Fields>]) -> bool {
        match self.try_save::<C>(records) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save local collection {}: {}", C::KEY, e);
                false
            }
        }
    }

    fn try_list<C: Collection>(&self) -> StorageResult<Vec<Record<C::Fields>>> {
        match self.storage.get(C::KEY)? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    fn try_save<C: Collection>(&mut self, records: &[Record<C::Fields>]) -> StorageResult<()> {
        let value = serde_json::to_string(records)?;
        self.storage.set(C::KEY, &value)
    }
}
