// ABOUTME: Integration tests for intake normalization of raw text values
// ABOUTME: Numeric parsing, bounds, localized enum tokens, and whole-profile defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan_core::errors::ValidationReason;
use fitplan_core::models::{
    ActivityLevel, DietType, FieldKind, Gender, Goal, MeatPreference, TrainingPreference,
};
use fitplan_engine::intake::{
    normalize, normalize_age, normalize_enum, normalize_height, normalize_profile,
    normalize_weight, ProfileDefaults, RawProfile, TypedValue,
};

#[test]
fn test_weight_accepts_units_and_decimal_comma() {
    assert!((normalize_weight("70").unwrap() - 70.0).abs() < f64::EPSILON);
    assert!((normalize_weight(" 72,5 kg ").unwrap() - 72.5).abs() < f64::EPSILON);
    assert!((normalize_weight("80кг").unwrap() - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_weight_rejects_words() {
    let error = normalize_weight("seventy").unwrap_err();
    assert_eq!(error.field, FieldKind::Weight);
    assert!(matches!(error.reason, ValidationReason::NotANumber { .. }));
}

#[test]
fn test_bounds_are_inclusive() {
    assert!(normalize_weight("30").is_ok());
    assert!(normalize_weight("250").is_ok());
    assert!(normalize_height("100 cm").is_ok());
    assert!(normalize_height("250").is_ok());

    let error = normalize_weight("29.9").unwrap_err();
    assert!(matches!(
        error.reason,
        ValidationReason::OutOfRange { min, max, .. } if (min - 30.0).abs() < f64::EPSILON && (max - 250.0).abs() < f64::EPSILON
    ));
    assert!(normalize_height("251").is_err());
}

#[test]
fn test_empty_input_is_missing() {
    let error = normalize_height("   ").unwrap_err();
    assert_eq!(error.reason, ValidationReason::Missing);
    let error = normalize_enum::<Gender>(FieldKind::Gender, "").unwrap_err();
    assert_eq!(error.reason, ValidationReason::Missing);
}

#[test]
fn test_age_bounds() {
    assert_eq!(normalize_age("30").unwrap(), 30);
    assert!(normalize_age("9").is_err());
    assert!(normalize_age("121").is_err());
}

#[test]
fn test_enum_matches_canonical_and_display_names() {
    for raw in ["male", "MALE", "Man", "мужчина"] {
        assert_eq!(
            normalize_enum::<Gender>(FieldKind::Gender, raw).unwrap(),
            Gender::Male,
            "{raw}"
        );
    }
    for raw in ["weight_loss", "WEIGHT LOSS", "lose weight", "Похудение"] {
        assert_eq!(
            normalize_enum::<Goal>(FieldKind::Goal, raw).unwrap(),
            Goal::WeightLoss,
            "{raw}"
        );
    }
    assert_eq!(
        normalize_enum::<ActivityLevel>(FieldKind::ActivityLevel, "moderately-active").unwrap(),
        ActivityLevel::ModeratelyActive
    );
}

#[test]
fn test_unknown_enum_lists_allowed_values() {
    let error = normalize_enum::<Goal>(FieldKind::Goal, "fly").unwrap_err();
    match error.reason {
        ValidationReason::UnknownEnumValue {
            input,
            allowed_values,
        } => {
            assert_eq!(input, "fly");
            assert_eq!(allowed_values, vec!["WEIGHT_LOSS", "MAINTAIN", "MUSCLE_GAIN"]);
        }
        other => panic!("unexpected reason: {other:?}"),
    }
}

#[test]
fn test_normalize_dispatches_by_field() {
    assert_eq!(
        normalize(FieldKind::Gender, "female").unwrap(),
        TypedValue::Gender(Gender::Female)
    );
    assert_eq!(
        normalize(FieldKind::Dairy, "нет").unwrap(),
        TypedValue::Dairy(false)
    );
    match normalize(FieldKind::Allergies, "Nuts; shellfish, ,").unwrap() {
        TypedValue::Allergies(set) => {
            assert_eq!(
                set.into_iter().collect::<Vec<_>>(),
                vec!["nuts".to_owned(), "shellfish".to_owned()]
            );
        }
        other => panic!("unexpected value: {other:?}"),
    }
    match normalize(FieldKind::Allergies, "none").unwrap() {
        TypedValue::Allergies(set) => assert!(set.is_empty()),
        other => panic!("unexpected value: {other:?}"),
    }
}

#[test]
fn test_normalize_profile_applies_defaults() {
    common::init_test_logging();
    let raw = RawProfile {
        weight: Some("70".to_owned()),
        height: Some("175".to_owned()),
        gender: Some("male".to_owned()),
        goal: Some("maintain".to_owned()),
        ..RawProfile::default()
    };
    let profile = normalize_profile(&raw, &ProfileDefaults::default()).unwrap();

    assert_eq!(profile.age, None);
    assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
    assert_eq!(profile.diet_type, DietType::Standard);
    assert_eq!(profile.meat_preference, MeatPreference::Any);
    assert!(profile.consumes_dairy);
    assert!(profile.allergies.is_empty());
    assert_eq!(profile.training_preference, TrainingPreference::Weights);
}

#[test]
fn test_normalize_profile_reports_first_bad_field() {
    let raw = RawProfile {
        weight: Some("70".to_owned()),
        height: Some("tall".to_owned()),
        gender: Some("robot".to_owned()),
        goal: Some("maintain".to_owned()),
        ..RawProfile::default()
    };
    let error = normalize_profile(&raw, &ProfileDefaults::default()).unwrap_err();
    assert_eq!(error.field, FieldKind::Height);

    let raw = RawProfile {
        weight: Some("70".to_owned()),
        height: Some("175".to_owned()),
        gender: Some("male".to_owned()),
        ..RawProfile::default()
    };
    let error = normalize_profile(&raw, &ProfileDefaults::default()).unwrap_err();
    assert_eq!(error.field, FieldKind::Goal);
    assert_eq!(error.reason, ValidationReason::Missing);
}
