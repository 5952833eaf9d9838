//! Workout record domain model.
//!
//! # Responsibility
//! - Define the one record shape owned by the record store.
//! - Provide construction and validation helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `name` and `repetitions` are non-empty after trimming.
//! - `repetitions` is free-form text; it is never parsed as a number.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one workout record.
pub type RecordId = Uuid;

/// Validation errors for record invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Nil UUID is reserved and cannot identify a record.
    NilId,
    /// `name` is empty after trimming.
    EmptyName,
    /// `repetitions` is empty after trimming.
    EmptyRepetitions,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "record id must not be nil"),
            Self::EmptyName => write!(f, "record name must not be empty"),
            Self::EmptyRepetitions => write!(f, "record repetitions must not be empty"),
        }
    }
}

impl Error for RecordValidationError {}

/// One workout entry: an exercise name plus a sets/reps description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Generated once at creation; survives every edit.
    pub id: RecordId,
    /// Exercise label, e.g. `Squat`.
    pub name: String,
    /// Free-form sets/reps text, e.g. `3x10`.
    pub repetitions: String,
}

impl WorkoutRecord {
    /// Creates a record with a freshly generated stable ID.
    ///
    /// Field contents are stored as given; call [`WorkoutRecord::validate`]
    /// before handing the record to a repository.
    pub fn new(name: impl Into<String>, repetitions: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            repetitions: repetitions.into(),
        }
    }

    /// Creates a record with a caller-provided ID.
    ///
    /// # Errors
    /// - Returns `NilId` when `id` is the nil UUID.
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        repetitions: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        if id.is_nil() {
            return Err(RecordValidationError::NilId);
        }
        Ok(Self {
            id,
            name: name.into(),
            repetitions: repetitions.into(),
        })
    }

    /// Checks record invariants.
    ///
    /// Errors are reported in field order: id, name, repetitions.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id.is_nil() {
            return Err(RecordValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if self.repetitions.trim().is_empty() {
            return Err(RecordValidationError::EmptyRepetitions);
        }
        Ok(())
    }

    /// Returns the record with surrounding whitespace removed from both fields.
    pub fn trimmed(mut self) -> Self {
        let name = self.name.trim();
        if name.len() != self.name.len() {
            self.name = name.to_string();
        }
        let repetitions = self.repetitions.trim();
        if repetitions.len() != self.repetitions.len() {
            self.repetitions = repetitions.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordValidationError, WorkoutRecord};

    #[test]
    fn trimmed_strips_surrounding_whitespace_only() {
        let record = WorkoutRecord::new("  Bench press ", "\t4 x 8\n").trimmed();
        assert_eq!(record.name, "Bench press");
        assert_eq!(record.repetitions, "4 x 8");
    }

    #[test]
    fn validate_reports_name_before_repetitions() {
        let record = WorkoutRecord::new(" ", "");
        assert_eq!(record.validate(), Err(RecordValidationError::EmptyName));
    }
}
