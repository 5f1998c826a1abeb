//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{load_movement_tuning, parse_tuning_json, parse_tuning_ron, validate_tuning};
use crate::movement::{DriveReference, MovementTuning};

#[test]
fn test_parse_full_ron() {
    let tuning = parse_tuning_ron(
        "inline",
        r#"(
            speed: 12.0,
            jump_power: 4.5,
            acceleration: 9.0,
            deceleration: 11.0,
            velocity_power: 0.9,
            friction_amount: 1.0,
            drive_reference: HorizontalVelocity,
        )"#,
    )
    .unwrap();

    assert_eq!(tuning.speed, 12.0);
    assert_eq!(tuning.jump_power, 4.5);
    assert_eq!(tuning.acceleration, 9.0);
    assert_eq!(tuning.deceleration, 11.0);
    assert_eq!(tuning.velocity_power, 0.9);
    assert_eq!(tuning.friction_amount, 1.0);
    assert_eq!(tuning.drive_reference, DriveReference::HorizontalVelocity);
}

#[test]
fn test_parse_partial_ron_keeps_defaults() {
    let tuning = parse_tuning_ron("inline", "(speed: 8.0)").unwrap();

    assert_eq!(tuning.speed, 8.0);
    assert_eq!(
        tuning,
        MovementTuning {
            speed: 8.0,
            ..Default::default()
        }
    );
}

#[test]
fn test_parse_accepts_legacy_field_names() {
    let tuning = parse_tuning_ron("inline", "(jumping_power: 3.0, decceleration: 20.0)").unwrap();
    assert_eq!(tuning.jump_power, 3.0);
    assert_eq!(tuning.deceleration, 20.0);

    let tuning =
        parse_tuning_json("inline", r#"{ "jumping_power": 6.0, "decceleration": 2.0 }"#).unwrap();
    assert_eq!(tuning.jump_power, 6.0);
    assert_eq!(tuning.deceleration, 2.0);
}

#[test]
fn test_parse_json() {
    let tuning = parse_tuning_json(
        "inline",
        r#"{ "speed": 15.0, "friction_amount": 0.5, "drive_reference": "VerticalVelocity" }"#,
    )
    .unwrap();

    assert_eq!(tuning.speed, 15.0);
    assert_eq!(tuning.friction_amount, 0.5);
    assert_eq!(tuning.acceleration, 13.0);
    assert_eq!(tuning.drive_reference, DriveReference::VerticalVelocity);
}

#[test]
fn test_parse_error_names_source() {
    let err = parse_tuning_ron("movement.ron", "(speed: fast)").unwrap_err();
    assert_eq!(err.file, "movement.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load movement.ron"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_movement_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/movement.ron");
    let tuning = load_movement_tuning(&path).unwrap();
    assert_eq!(tuning, MovementTuning::default());
}

#[test]
fn test_validate_defaults_clean() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_validate_reports_without_changing() {
    let tuning = MovementTuning {
        speed: -1.0,
        velocity_power: f32::NAN,
        ..Default::default()
    };

    let warnings = validate_tuning(&tuning);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].field, "speed");
    assert_eq!(warnings[0].reason, "is negative");
    assert_eq!(warnings[1].field, "velocity_power");
    assert_eq!(warnings[1].reason, "is not finite");
    assert_eq!(tuning.speed, -1.0);
}
