//! Record store use-case service.
//!
//! # Responsibility
//! - Provide the public add/update/remove/find/list contract of the store.
//! - Normalize user input (trim) before it reaches the repository.
//! - Track a mutation revision so views can detect change.
//!
//! # Invariants
//! - The service exclusively owns its repository; callers only read
//!   snapshots through `find`/`list`.
//! - `revision` increments exactly once per successful mutation.
//! - Failed operations leave both the collection and `revision` unchanged.

use crate::model::record::{RecordId, WorkoutRecord};
use crate::repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoResult};
use log::{debug, warn};

/// Record store backed by the in-memory repository.
pub type RecordStore = RecordService<InMemoryRecordRepository>;

/// Use-case service wrapper for record CRUD operations.
#[derive(Debug, Default)]
pub struct RecordService<R: RecordRepository> {
    repo: R,
    revision: u64,
}

impl RecordStore {
    /// Creates an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRecordRepository::new())
    }
}

impl<R: RecordRepository> RecordService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo, revision: 0 }
    }

    /// Appends a new record and returns its generated ID.
    ///
    /// # Contract
    /// - Surrounding whitespace is trimmed from both fields before storage.
    /// - Blank fields are rejected with `RepoError::Validation`; the
    ///   collection is unchanged.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        repetitions: impl Into<String>,
    ) -> RepoResult<RecordId> {
        let record = WorkoutRecord::new(name, repetitions).trimmed();
        match self.repo.create_record(record) {
            Ok(id) => {
                self.bump_revision();
                debug!(
                    "event=record_add module=store status=ok record_id={} count={}",
                    id,
                    self.repo.len()
                );
                Ok(id)
            }
            Err(err) => {
                debug!("event=record_add module=store status=rejected reason={err}");
                Err(err)
            }
        }
    }

    /// Replaces `name`/`repetitions` of an existing record in place.
    ///
    /// Position and identity are preserved. Unknown IDs report
    /// `RepoError::NotFound`.
    pub fn update(
        &mut self,
        id: RecordId,
        name: impl Into<String>,
        repetitions: impl Into<String>,
    ) -> RepoResult<()> {
        let record = WorkoutRecord::with_id(id, name, repetitions)?.trimmed();
        if let Err(err) = self.repo.update_record(&record) {
            warn!("event=record_update module=store status=error record_id={id} reason={err}");
            return Err(err);
        }

        self.bump_revision();
        debug!("event=record_update module=store status=ok record_id={id}");
        Ok(())
    }

    /// Removes one record by ID.
    ///
    /// Removing an ID that is not live (including a second removal of the
    /// same ID) reports `RepoError::NotFound` and changes nothing.
    pub fn remove(&mut self, id: RecordId) -> RepoResult<()> {
        if let Err(err) = self.repo.delete_record(id) {
            warn!("event=record_remove module=store status=error record_id={id} reason={err}");
            return Err(err);
        }

        self.bump_revision();
        debug!(
            "event=record_remove module=store status=ok record_id={} count={}",
            id,
            self.repo.len()
        );
        Ok(())
    }

    /// Returns an owned copy of one record, if live.
    pub fn find(&self, id: RecordId) -> Option<WorkoutRecord> {
        self.repo.get_record(id).cloned()
    }

    /// Returns all records in insertion order.
    ///
    /// The returned vector is a snapshot; later mutations do not affect it.
    pub fn list(&self) -> Vec<WorkoutRecord> {
        self.repo.list_records().to_vec()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Mutation counter, starting at `0` for a fresh store.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStore;
    use crate::repo::record_repo::RepoError;

    #[test]
    fn add_trims_fields_before_storage() {
        let mut store = RecordStore::in_memory();
        let id = store.add("  Lunge  ", " 3x12 ").unwrap();

        let record = store.find(id).unwrap();
        assert_eq!(record.name, "Lunge");
        assert_eq!(record.repetitions, "3x12");
    }

    #[test]
    fn revision_tracks_successful_mutations_only() {
        let mut store = RecordStore::in_memory();
        assert_eq!(store.revision(), 0);

        let id = store.add("Squat", "3x10").unwrap();
        assert_eq!(store.revision(), 1);

        assert!(store.add("", "3x10").is_err());
        assert_eq!(store.revision(), 1);

        store.update(id, "Front squat", "3x8").unwrap();
        assert_eq!(store.revision(), 2);

        store.remove(id).unwrap();
        assert_eq!(store.revision(), 3);

        assert_eq!(store.remove(id), Err(RepoError::NotFound(id)));
        assert_eq!(store.revision(), 3);
    }
}
