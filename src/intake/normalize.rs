// ABOUTME: Profile normalizer turning raw intake text into typed profile values
// ABOUTME: Numeric parsing with bounds, enum token matching, dairy and allergy parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Normalizer
//!
//! Every function here is pure: a raw value plus the static token tables in,
//! a typed value or a [`ValidationError`] out.

use super::defaults::ProfileDefaults;
use super::tokens::Tokenized;
use fitplan_core::constants::intake::{
    AGE_UNITS, HEIGHT_UNITS, MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM,
    MIN_WEIGHT_KG, NO_TOKENS, WEIGHT_UNITS, YES_TOKENS,
};
use fitplan_core::errors::ValidationError;
use fitplan_core::models::{
    ActivityLevel, DietType, FieldKind, Gender, Goal, MeatPreference, TrainingPreference,
    UserProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A normalized intake value
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Weight (kg)
    Weight(f64),
    /// Height (cm)
    Height(f64),
    /// Age (years)
    Age(u32),
    /// Gender
    Gender(Gender),
    /// Goal
    Goal(Goal),
    /// Activity level
    ActivityLevel(ActivityLevel),
    /// Diet type
    DietType(DietType),
    /// Meat preference
    MeatPreference(MeatPreference),
    /// Training type
    TrainingType(TrainingPreference),
    /// Dairy consumption
    Dairy(bool),
    /// Allergy entries
    Allergies(BTreeSet<String>),
}

/// Normalize one raw value for the given field
///
/// # Errors
///
/// Returns a `ValidationError` naming the field when the value is empty,
/// unparsable, out of range, or not a recognized token
pub fn normalize(field: FieldKind, raw: &str) -> Result<TypedValue, ValidationError> {
    match field {
        FieldKind::Weight => normalize_weight(raw).map(TypedValue::Weight),
        FieldKind::Height => normalize_height(raw).map(TypedValue::Height),
        FieldKind::Age => normalize_age(raw).map(TypedValue::Age),
        FieldKind::Gender => normalize_enum(field, raw).map(TypedValue::Gender),
        FieldKind::Goal => normalize_enum(field, raw).map(TypedValue::Goal),
        FieldKind::ActivityLevel => normalize_enum(field, raw).map(TypedValue::ActivityLevel),
        FieldKind::DietType => normalize_enum(field, raw).map(TypedValue::DietType),
        FieldKind::MeatPreference => normalize_enum(field, raw).map(TypedValue::MeatPreference),
        FieldKind::TrainingType => normalize_enum(field, raw).map(TypedValue::TrainingType),
        FieldKind::Dairy => normalize_yes_no(field, raw).map(TypedValue::Dairy),
        FieldKind::Allergies => Ok(TypedValue::Allergies(parse_allergies(raw))),
    }
}

/// Parse and bound-check a body weight
///
/// # Errors
///
/// `NotANumber` or `OutOfRange` (30-250 kg)
pub fn normalize_weight(raw: &str) -> Result<f64, ValidationError> {
    parse_bounded(FieldKind::Weight, raw, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Parse and bound-check a height
///
/// # Errors
///
/// `NotANumber` or `OutOfRange` (100-250 cm)
pub fn normalize_height(raw: &str) -> Result<f64, ValidationError> {
    parse_bounded(FieldKind::Height, raw, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

/// Parse and bound-check an age; fractional years are truncated
///
/// # Errors
///
/// `NotANumber` or `OutOfRange` (10-120 years)
pub fn normalize_age(raw: &str) -> Result<u32, ValidationError> {
    let years = parse_bounded(
        FieldKind::Age,
        raw,
        f64::from(MIN_AGE),
        f64::from(MAX_AGE),
    )?;
    Ok(years.trunc() as u32)
}

/// Resolve an enum field from its canonical token or a display name
///
/// # Errors
///
/// `Missing` for blank input, `UnknownEnumValue` listing the canonical tokens otherwise
pub fn normalize_enum<T: Tokenized>(field: FieldKind, raw: &str) -> Result<T, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    T::lookup(raw)
        .ok_or_else(|| ValidationError::unknown_value(field, raw.trim(), T::allowed_values()))
}

/// Bound-check the numeric fields of an already typed profile
///
/// # Errors
///
/// `OutOfRange` for the first field outside its bounds
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    check_range(FieldKind::Weight, profile.weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
    check_range(FieldKind::Height, profile.height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
    if let Some(age) = profile.age {
        check_range(
            FieldKind::Age,
            f64::from(age),
            f64::from(MIN_AGE),
            f64::from(MAX_AGE),
        )?;
    }
    Ok(())
}

/// Raw profile as submitted to the direct generation path
///
/// Only weight, height, gender and goal are required; every other field
/// falls back to [`ProfileDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    /// Weight text, e.g. `"72,5 kg"`
    pub weight: Option<String>,
    /// Height text
    pub height: Option<String>,
    /// Gender token or display name
    pub gender: Option<String>,
    /// Goal token or display name
    pub goal: Option<String>,
    /// Age text
    pub age: Option<String>,
    /// Activity level token
    pub activity_level: Option<String>,
    /// Diet type token
    pub diet_type: Option<String>,
    /// Meat preference token
    pub meat_preference: Option<String>,
    /// Dairy yes/no
    pub dairy: Option<String>,
    /// Comma- or semicolon-separated allergy list
    pub allergies: Option<String>,
    /// Training type token
    pub training_type: Option<String>,
}

/// Normalize a whole raw profile
///
/// # Errors
///
/// Returns the first field's `ValidationError`, in intake order
pub fn normalize_profile(
    raw: &RawProfile,
    defaults: &ProfileDefaults,
) -> Result<UserProfile, ValidationError> {
    let weight_kg = normalize_weight(required(FieldKind::Weight, raw.weight.as_ref())?)?;
    let height_cm = normalize_height(required(FieldKind::Height, raw.height.as_ref())?)?;
    let gender = normalize_enum(
        FieldKind::Gender,
        required(FieldKind::Gender, raw.gender.as_ref())?,
    )?;
    let goal = normalize_enum(FieldKind::Goal, required(FieldKind::Goal, raw.goal.as_ref())?)?;

    Ok(UserProfile {
        weight_kg,
        height_cm,
        age: raw.age.as_deref().map(normalize_age).transpose()?,
        gender,
        goal,
        activity_level: optional_enum(FieldKind::ActivityLevel, raw.activity_level.as_deref())?
            .unwrap_or(defaults.activity_level),
        diet_type: optional_enum(FieldKind::DietType, raw.diet_type.as_deref())?
            .unwrap_or(defaults.diet_type),
        meat_preference: optional_enum(FieldKind::MeatPreference, raw.meat_preference.as_deref())?
            .unwrap_or(defaults.meat_preference),
        consumes_dairy: raw
            .dairy
            .as_deref()
            .map(|v| normalize_yes_no(FieldKind::Dairy, v))
            .transpose()?
            .unwrap_or(defaults.consumes_dairy),
        allergies: raw
            .allergies
            .as_deref()
            .map_or_else(|| defaults.allergies.clone(), parse_allergies),
        training_preference: optional_enum(FieldKind::TrainingType, raw.training_type.as_deref())?
            .unwrap_or(defaults.training_preference),
    })
}

fn required(field: FieldKind, value: Option<&String>) -> Result<&str, ValidationError> {
    value
        .map(String::as_str)
        .ok_or_else(|| ValidationError::missing(field))
}

fn optional_enum<T: Tokenized>(
    field: FieldKind,
    raw: Option<&str>,
) -> Result<Option<T>, ValidationError> {
    raw.map(|v| normalize_enum(field, v)).transpose()
}

const fn unit_suffixes(field: FieldKind) -> &'static [&'static str] {
    match field {
        FieldKind::Weight => WEIGHT_UNITS,
        FieldKind::Height => HEIGHT_UNITS,
        FieldKind::Age => AGE_UNITS,
        _ => &[],
    }
}

/// Accepts surrounding whitespace, a decimal comma and the field's own unit
fn parse_number(field: FieldKind, raw: &str) -> Result<f64, ValidationError> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return Err(ValidationError::missing(field));
    }

    let without_unit = unit_suffixes(field)
        .iter()
        .find_map(|unit| text.strip_suffix(unit))
        .unwrap_or(text.as_str())
        .trim()
        .replace(',', ".");

    without_unit
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::not_a_number(field, raw.trim()))
}

fn parse_bounded(field: FieldKind, raw: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let value = parse_number(field, raw)?;
    check_range(field, value, min, max)?;
    Ok(value)
}

fn check_range(field: FieldKind, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}

fn normalize_yes_no(field: FieldKind, raw: &str) -> Result<bool, ValidationError> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        return Err(ValidationError::missing(field));
    }
    if YES_TOKENS.contains(&token.as_str()) {
        Ok(true)
    } else if NO_TOKENS.contains(&token.as_str()) {
        Ok(false)
    } else {
        Err(ValidationError::unknown_value(
            field,
            raw.trim(),
            vec!["yes".to_owned(), "no".to_owned()],
        ))
    }
}

/// Split on commas and semicolons, lowercase, drop blanks; "no"/"none" is the empty set
fn parse_allergies(raw: &str) -> BTreeSet<String> {
    let trimmed = raw.trim().to_lowercase();
    if trimmed == "none" || NO_TOKENS.contains(&trimmed.as_str()) {
        return BTreeSet::new();
    }
    trimmed
        .split([',', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::ValidationReason;

    #[test]
    fn test_number_formats() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(normalize_weight("70").unwrap(), 70.0));
        assert!(close(normalize_weight(" 72,5 kg ").unwrap(), 72.5));
        assert!(close(normalize_weight("80кг").unwrap(), 80.0));
        assert!(close(normalize_height("180 cm").unwrap(), 180.0));
        assert_eq!(normalize_age("30.9").unwrap(), 30);
        assert_eq!(normalize_age("41 лет").unwrap(), 41);
    }

    #[test]
    fn test_unit_must_match_field() {
        let error = normalize_height("180 kg").unwrap_err();
        assert!(matches!(error.reason, ValidationReason::NotANumber { .. }));
        let error = normalize_weight("70 years").unwrap_err();
        assert!(matches!(error.reason, ValidationReason::NotANumber { .. }));
        assert!(normalize_age("30 cm").is_err());
    }

    #[test]
    fn test_non_finite_is_not_a_number() {
        let error = normalize_weight("NaN").unwrap_err();
        assert!(matches!(error.reason, ValidationReason::NotANumber { .. }));
        let error = normalize_weight("inf").unwrap_err();
        assert!(matches!(error.reason, ValidationReason::NotANumber { .. }));
    }

    #[test]
    fn test_allergy_list_parsing() {
        let parsed = parse_allergies(" Nuts, shellfish ;; Gluten ");
        assert_eq!(
            parsed.into_iter().collect::<Vec<_>>(),
            vec!["gluten", "nuts", "shellfish"]
        );
        assert!(parse_allergies("нет").is_empty());
        assert!(parse_allergies("None").is_empty());
    }

    #[test]
    fn test_dairy_tokens() {
        assert_eq!(
            normalize(FieldKind::Dairy, "Да").unwrap(),
            TypedValue::Dairy(true)
        );
        assert_eq!(
            normalize(FieldKind::Dairy, "no").unwrap(),
            TypedValue::Dairy(false)
        );
        assert!(normalize(FieldKind::Dairy, "sometimes").is_err());
    }
}
