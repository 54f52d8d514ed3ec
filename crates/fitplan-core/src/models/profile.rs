// ABOUTME: User profile models for plan generation and conversational intake
// ABOUTME: UserProfile, PartialProfile, ProfileSnapshot, and the FieldKind identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tokens::{ActivityLevel, DietType, Gender, Goal, MeatPreference, TrainingPreference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifies a single intake field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Body weight in kilograms
    Weight,
    /// Height in centimeters
    Height,
    /// Age in years
    Age,
    /// Biological gender
    Gender,
    /// Training goal
    Goal,
    /// Activity level
    ActivityLevel,
    /// Diet type
    DietType,
    /// Meat preference
    MeatPreference,
    /// Training type (weights, bodyweight, cardio)
    TrainingType,
    /// Whether the user consumes dairy
    Dairy,
    /// Free-text allergy list
    Allergies,
}

impl FieldKind {
    /// Field name as used in messages and error payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Goal => "goal",
            Self::ActivityLevel => "activity_level",
            Self::DietType => "diet_type",
            Self::MeatPreference => "meat_preference",
            Self::TrainingType => "training_type",
            Self::Dairy => "dairy",
            Self::Allergies => "allergies",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully specified user profile consumed by the generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight (kg), within the intake bounds
    pub weight_kg: f64,
    /// Height (cm), within the intake bounds
    pub height_cm: f64,
    /// Age in years; generation substitutes the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Biological gender
    pub gender: Gender,
    /// Training goal
    pub goal: Goal,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Diet type
    pub diet_type: DietType,
    /// Accepted animal-protein category
    pub meat_preference: MeatPreference,
    /// Whether dairy recipes are acceptable
    pub consumes_dairy: bool,
    /// Allergy entries, lowercased and trimmed
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    /// Equipment mode for training
    pub training_preference: TrainingPreference,
}

impl UserProfile {
    /// Add an allergy entry, normalized to lowercase
    #[must_use]
    pub fn with_allergy(mut self, allergy: impl AsRef<str>) -> Self {
        let entry = allergy.as_ref().trim().to_lowercase();
        if !entry.is_empty() {
            self.allergies.insert(entry);
        }
        self
    }
}

/// Profile being filled turn by turn during the intake dialogue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialProfile {
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Biological gender
    pub gender: Option<Gender>,
    /// Training goal
    pub goal: Option<Goal>,
}

impl PartialProfile {
    /// Whether every collected field is set
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.weight_kg.is_some()
            && self.height_cm.is_some()
            && self.gender.is_some()
            && self.goal.is_some()
    }

    /// First field that is still missing, in intake order
    #[must_use]
    pub const fn first_missing(&self) -> Option<FieldKind> {
        if self.weight_kg.is_none() {
            Some(FieldKind::Weight)
        } else if self.height_cm.is_none() {
            Some(FieldKind::Height)
        } else if self.gender.is_none() {
            Some(FieldKind::Gender)
        } else if self.goal.is_none() {
            Some(FieldKind::Goal)
        } else {
            None
        }
    }
}

/// Profile values frozen at generation time
///
/// Stored alongside a generated training plan so later profile edits never
/// alter history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Gender at generation time
    pub gender: Gender,
    /// Age the plan was computed with, defaulted when the user never gave one
    pub age: u32,
    /// Weight (kg) at generation time
    pub weight_kg: f64,
    /// Height (cm) at generation time
    pub height_cm: f64,
    /// Activity level at generation time
    pub activity_level: ActivityLevel,
    /// Goal at generation time
    pub goal: Goal,
    /// Training type at generation time
    pub training_type: TrainingPreference,
}

impl ProfileSnapshot {
    /// Freeze a profile together with the age generation used for it
    #[must_use]
    pub const fn capture(profile: &UserProfile, age: u32) -> Self {
        Self {
            gender: profile.gender,
            age,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            activity_level: profile.activity_level,
            goal: profile.goal,
            training_type: profile.training_preference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_missing_order() {
        let mut draft = PartialProfile::default();
        assert_eq!(draft.first_missing(), Some(FieldKind::Weight));

        draft.weight_kg = Some(70.0);
        draft.height_cm = Some(175.0);
        assert_eq!(draft.first_missing(), Some(FieldKind::Gender));

        draft.gender = Some(Gender::Female);
        draft.goal = Some(Goal::Maintain);
        assert!(draft.is_complete());
        assert_eq!(draft.first_missing(), None);
    }
}
