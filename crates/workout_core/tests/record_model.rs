use uuid::Uuid;
use workout_core::{RecordValidationError, WorkoutRecord};

#[test]
fn record_new_generates_distinct_ids() {
    let first = WorkoutRecord::new("Squat", "3x10");
    let second = WorkoutRecord::new("Squat", "3x10");

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Squat");
    assert_eq!(first.repetitions, "3x10");
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = WorkoutRecord::with_id(Uuid::nil(), "Squat", "3x10").unwrap_err();
    assert_eq!(err, RecordValidationError::NilId);
}

#[test]
fn validate_rejects_blank_fields() {
    assert_eq!(
        WorkoutRecord::new("Squat", "  ").validate(),
        Err(RecordValidationError::EmptyRepetitions)
    );
    assert_eq!(
        WorkoutRecord::new("\t", "3x10").validate(),
        Err(RecordValidationError::EmptyName)
    );
    assert!(WorkoutRecord::new("Squat", "until failure").validate().is_ok());
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = WorkoutRecord::with_id(id, "Pull-up", "5x5").unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Pull-up");
    assert_eq!(json["repetitions"], "5x5");

    let decoded: WorkoutRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}
