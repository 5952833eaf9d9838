//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered record collection.
//! - Keep storage layout details out of the service layer.
//!
//! # Invariants
//! - Write paths call `WorkoutRecord::validate()` before mutating.
//! - Records keep insertion order; updates never move a record.
//! - Record ids are unique across the live collection.

use crate::model::record::{RecordId, RecordValidationError, WorkoutRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(RecordValidationError),
    NotFound(RecordId),
    DuplicateId(RecordId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for record CRUD operations.
pub trait RecordRepository {
    fn create_record(&mut self, record: WorkoutRecord) -> RepoResult<RecordId>;
    fn update_record(&mut self, record: &WorkoutRecord) -> RepoResult<()>;
    fn get_record(&self, id: RecordId) -> Option<&WorkoutRecord>;
    fn list_records(&self) -> &[WorkoutRecord];
    fn delete_record(&mut self, id: RecordId) -> RepoResult<WorkoutRecord>;

    fn len(&self) -> usize {
        self.list_records().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered in-memory record repository.
///
/// Lookups are linear; the collection is a personal list of exercises, not a
/// data set.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    records: Vec<WorkoutRecord>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn create_record(&mut self, record: WorkoutRecord) -> RepoResult<RecordId> {
        record.validate()?;
        if self.position(record.id).is_some() {
            return Err(RepoError::DuplicateId(record.id));
        }

        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    fn update_record(&mut self, record: &WorkoutRecord) -> RepoResult<()> {
        record.validate()?;
        let index = self
            .position(record.id)
            .ok_or(RepoError::NotFound(record.id))?;

        let slot = &mut self.records[index];
        slot.name.clone_from(&record.name);
        slot.repetitions.clone_from(&record.repetitions);
        Ok(())
    }

    fn get_record(&self, id: RecordId) -> Option<&WorkoutRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    fn list_records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    fn delete_record(&mut self, id: RecordId) -> RepoResult<WorkoutRecord> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.records.remove(index))
    }
}
