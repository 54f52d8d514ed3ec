// ABOUTME: Plan generation error taxonomy with conversion into AppError
// ABOUTME: ValidationError for intake values, PlanError for generation and lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Error Types
//!
//! Every condition here is expected and recoverable. None of them should end
//! a conversation or lose session state; they are reported to the immediate
//! caller, which decides how to surface them.

use super::{AppError, ErrorCode};
use crate::models::{FieldKind, Goal, NutritionTargets};
use serde_json::json;
use thiserror::Error;

/// Why a raw intake value was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationReason {
    /// The value could not be parsed as a number
    #[error("'{input}' is not a number")]
    NotANumber {
        /// Raw input
        input: String,
    },
    /// The value parsed but falls outside the documented bounds
    #[error("{value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        /// Parsed value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// The value matched no canonical token or display name
    #[error("'{input}' is not one of: {}", .allowed_values.join(", "))]
    UnknownEnumValue {
        /// Raw input
        input: String,
        /// Canonical tokens that would have been accepted
        allowed_values: Vec<String>,
    },
    /// No value was supplied
    #[error("a value is required")]
    Missing,
}

/// Rejected intake value for a given field
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Field being normalized
    pub field: FieldKind,
    /// Why it was rejected
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Create a validation error
    #[must_use]
    pub const fn new(field: FieldKind, reason: ValidationReason) -> Self {
        Self { field, reason }
    }

    /// Create a "not a number" error
    #[must_use]
    pub fn not_a_number(field: FieldKind, input: impl Into<String>) -> Self {
        Self::new(
            field,
            ValidationReason::NotANumber {
                input: input.into(),
            },
        )
    }

    /// Create an "out of range" error
    #[must_use]
    pub const fn out_of_range(field: FieldKind, value: f64, min: f64, max: f64) -> Self {
        Self::new(field, ValidationReason::OutOfRange { value, min, max })
    }

    /// Create an "unknown enum value" error
    #[must_use]
    pub fn unknown_value(
        field: FieldKind,
        input: impl Into<String>,
        allowed_values: Vec<String>,
    ) -> Self {
        Self::new(
            field,
            ValidationReason::UnknownEnumValue {
                input: input.into(),
                allowed_values,
            },
        )
    }

    /// Create a "missing value" error
    #[must_use]
    pub const fn missing(field: FieldKind) -> Self {
        Self::new(field, ValidationReason::Missing)
    }
}

/// Errors raised by plan generation and reference lookups
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// An intake value failed normalization
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A reference-data lookup key matched nothing
    #[error("unknown {kind} '{input}', expected one of: {}", .allowed_values.join(", "))]
    UnknownEnumValue {
        /// Kind of key (goal, diet type...)
        kind: &'static str,
        /// Key as supplied
        input: String,
        /// Keys that would have been accepted
        allowed_values: Vec<String>,
    },

    /// Zero recipes satisfy the base dietary constraints
    ///
    /// Carries the computed targets so the caller can present an empty plan.
    #[error("no recipe in the catalog satisfies the dietary constraints")]
    NoCompatibleRecipes {
        /// Energy and macro targets computed before recipe selection
        targets: NutritionTargets,
    },

    /// No training template matches the `(goal, with_weights)` pair
    #[error("no training template for goal {goal} with_weights={with_weights}")]
    NotFound {
        /// Requested goal
        goal: Goal,
        /// Requested equipment mode
        with_weights: bool,
    },

    /// The catalog lacks a row for a known key
    #[error("reference data has no {kind} entry for '{key}'")]
    MissingReference {
        /// Table name
        kind: &'static str,
        /// Key looked up
        key: String,
    },
}

impl PlanError {
    /// Whether this error reflects bad client input rather than missing data
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownEnumValue { .. })
    }
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let message = error.to_string();
        match error {
            PlanError::Validation(ValidationError {
                field,
                reason: ValidationReason::OutOfRange { value, min, max },
            }) => Self::new(ErrorCode::ValueOutOfRange, message).with_details(json!({
                "field": field.as_str(),
                "value": value,
                "min": min,
                "max": max,
            })),
            PlanError::Validation(ValidationError {
                field,
                reason: ValidationReason::NotANumber { input },
            }) => Self::new(ErrorCode::InvalidFormat, message).with_details(json!({
                "field": field.as_str(),
                "input": input,
            })),
            PlanError::Validation(ValidationError {
                field,
                reason: ValidationReason::Missing,
            }) => Self::new(ErrorCode::MissingRequiredField, message)
                .with_details(json!({ "field": field.as_str() })),
            PlanError::Validation(ValidationError {
                field,
                reason:
                    ValidationReason::UnknownEnumValue {
                        input,
                        allowed_values,
                    },
            }) => Self::new(ErrorCode::InvalidInput, message).with_details(json!({
                "field": field.as_str(),
                "input": input,
                "allowed_values": allowed_values,
            })),
            PlanError::UnknownEnumValue {
                kind,
                input,
                allowed_values,
            } => Self::new(ErrorCode::InvalidInput, message).with_details(json!({
                "kind": kind,
                "input": input,
                "allowed_values": allowed_values,
            })),
            PlanError::NoCompatibleRecipes { targets } => {
                Self::new(ErrorCode::ResourceNotFound, message).with_details(json!({
                    "calories": targets.calories,
                    "protein_g": targets.protein_g,
                    "fat_g": targets.fat_g,
                    "carbs_g": targets.carbs_g,
                }))
            }
            PlanError::NotFound {
                goal,
                with_weights,
            } => Self::new(ErrorCode::ResourceNotFound, message).with_details(json!({
                "goal": goal,
                "with_weights": with_weights,
            })),
            PlanError::MissingReference { kind, key } => {
                Self::new(ErrorCode::ConfigInvalid, message).with_resource_id(format!("{kind}:{key}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_range_code() {
        let error: AppError =
            PlanError::from(ValidationError::out_of_range(FieldKind::Weight, 20.0, 30.0, 250.0))
                .into();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.context.details["field"], "weight");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error: AppError = PlanError::NotFound {
            goal: Goal::WeightLoss,
            with_weights: false,
        }
        .into();
        assert_eq!(error.http_status(), 404);
        assert_eq!(error.context.details["goal"], "WEIGHT_LOSS");
    }

    #[test]
    fn test_unknown_value_message_lists_allowed() {
        let error = ValidationError::unknown_value(
            FieldKind::Gender,
            "robot",
            vec!["MALE".to_owned(), "FEMALE".to_owned()],
        );
        assert_eq!(
            error.to_string(),
            "invalid gender: 'robot' is not one of: MALE, FEMALE"
        );
    }
}
