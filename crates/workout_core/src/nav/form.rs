//! Create/edit form draft and per-field validation.
//!
//! # Invariants
//! - Both fields are required: non-empty after trimming.
//! - A field's error flag clears as soon as that field becomes non-empty;
//!   the other field's flag is left alone.
//! - `validate` sets both flags from scratch.

use crate::model::record::WorkoutRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message surfaced under an empty name field.
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
/// Message surfaced under an empty repetitions field.
pub const REPETITIONS_REQUIRED_MESSAGE: &str = "Repetitions are required";

/// Editable field of the record form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Repetitions,
}

impl FormField {
    /// Stable field id shared with the UI shell.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Repetitions => "repetitions",
        }
    }

    /// Message shown when this field fails validation.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Name => NAME_REQUIRED_MESSAGE,
            Self::Repetitions => REPETITIONS_REQUIRED_MESSAGE,
        }
    }
}

/// Parses one field id (`name|repetitions`, `reps` accepted as shorthand).
pub fn parse_form_field(value: &str) -> Option<FormField> {
    match value.trim() {
        "name" => Some(FormField::Name),
        "repetitions" | "reps" => Some(FormField::Repetitions),
        _ => None,
    }
}

/// Field values submitted with a save action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub repetitions: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, repetitions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repetitions: repetitions.into(),
        }
    }
}

/// Trimmed field values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub name: String,
    pub repetitions: String,
}

/// Per-field validation failure set. Never empty when returned as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub repetitions: bool,
}

impl FieldErrors {
    pub fn contains(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name,
            FormField::Repetitions => self.repetitions,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.name && !self.repetitions
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> Vec<FormField> {
        [FormField::Name, FormField::Repetitions]
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .fields()
            .into_iter()
            .map(FormField::required_message)
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for FieldErrors {}

/// In-progress form state for the create and edit screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    name: String,
    repetitions: String,
    errors: FieldErrors,
}

impl FormDraft {
    /// Empty draft used by the create screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft prefilled from an existing record for the edit screen.
    pub fn from_record(record: &WorkoutRecord) -> Self {
        Self {
            name: record.name.clone(),
            repetitions: record.repetitions.clone(),
            errors: FieldErrors::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repetitions(&self) -> &str {
        &self.repetitions
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Repetitions => &self.repetitions,
        }
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn has_error(&self, field: FormField) -> bool {
        self.errors.contains(field)
    }

    /// Message to surface under `field`, if it is currently flagged.
    pub fn error_message(&self, field: FormField) -> Option<&'static str> {
        self.has_error(field).then(|| field.required_message())
    }

    /// Replaces one field's text.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let filled = !value.trim().is_empty();
        match field {
            FormField::Name => {
                self.name = value;
                if filled {
                    self.errors.name = false;
                }
            }
            FormField::Repetitions => {
                self.repetitions = value;
                if filled {
                    self.errors.repetitions = false;
                }
            }
        }
    }

    /// Replaces both fields with submitted values.
    pub fn apply_input(&mut self, input: FormInput) {
        self.set_field(FormField::Name, input.name);
        self.set_field(FormField::Repetitions, input.repetitions);
    }

    /// Validates both fields and refreshes the error flags.
    pub fn validate(&mut self) -> Result<ValidatedInput, FieldErrors> {
        let name = self.name.trim();
        let repetitions = self.repetitions.trim();
        self.errors = FieldErrors {
            name: name.is_empty(),
            repetitions: repetitions.is_empty(),
        };

        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        Ok(ValidatedInput {
            name: name.to_string(),
            repetitions: repetitions.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_form_field, FieldErrors, FormDraft, FormField, NAME_REQUIRED_MESSAGE};

    #[test]
    fn validate_flags_each_blank_field() {
        let mut draft = FormDraft::new();
        draft.set_field(FormField::Repetitions, "  ");

        let errors = draft.validate().expect_err("blank draft must fail");
        assert_eq!(
            errors,
            FieldErrors {
                name: true,
                repetitions: true
            }
        );
        assert_eq!(
            draft.error_message(FormField::Name),
            Some(NAME_REQUIRED_MESSAGE)
        );
        assert_eq!(errors.to_string(), "Name is required; Repetitions are required");
    }

    #[test]
    fn field_error_clears_independently_once_filled() {
        let mut draft = FormDraft::new();
        draft.validate().expect_err("blank draft must fail");

        draft.set_field(FormField::Name, " ");
        assert!(draft.has_error(FormField::Name));

        draft.set_field(FormField::Name, "Squat");
        assert!(!draft.has_error(FormField::Name));
        assert!(draft.has_error(FormField::Repetitions));
    }

    #[test]
    fn validate_returns_trimmed_values() {
        let mut draft = FormDraft::new();
        draft.set_field(FormField::Name, " Plank ");
        draft.set_field(FormField::Repetitions, "3 x 60s\n");

        let input = draft.validate().expect("filled draft must pass");
        assert_eq!(input.name, "Plank");
        assert_eq!(input.repetitions, "3 x 60s");
        assert!(draft.errors().is_empty());
    }

    #[test]
    fn parses_field_ids() {
        assert_eq!(parse_form_field("name"), Some(FormField::Name));
        assert_eq!(parse_form_field(" reps "), Some(FormField::Repetitions));
        assert_eq!(parse_form_field("weight"), None);
    }
}
